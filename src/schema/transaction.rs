//! Transaction request and cosignature request schemas
//!
//! Both carry `data = {payload}` where `payload` is the hex serialization of
//! an unsigned transaction. Rebuilding the transaction is delegated to an
//! injected [`TransactionFactory`].

use serde_json::{json, Value};
use std::sync::Arc;

use super::QrCodeDataSchema;
use crate::artifact::{CosignatureQr, TransactionQr};
use crate::envelope::Envelope;
use crate::error::{QrError, QrResult};
use crate::log_warn;
use crate::sdk::{Transaction, TransactionFactory};
use crate::types::QrCodeType;
use crate::utils::require_json_string;

pub struct RequestTransactionDataSchema;

pub struct RequestCosignatureDataSchema;

impl QrCodeDataSchema for RequestTransactionDataSchema {
    type Artifact = TransactionQr;

    fn get_data(qr: &TransactionQr) -> QrResult<Value> {
        Ok(payload_data(qr.transaction().as_ref()))
    }
}

impl QrCodeDataSchema for RequestCosignatureDataSchema {
    type Artifact = CosignatureQr;

    fn get_data(qr: &CosignatureQr) -> QrResult<Value> {
        Ok(payload_data(qr.transaction().as_ref()))
    }
}

impl RequestTransactionDataSchema {
    pub fn parse(json: &str, factory: &dyn TransactionFactory) -> QrResult<TransactionQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::RequestTransaction)?, factory)
    }

    pub(crate) fn from_envelope(envelope: Envelope, factory: &dyn TransactionFactory) -> QrResult<TransactionQr> {
        let transaction = rebuild_transaction(&envelope.data, factory)?;
        Ok(TransactionQr::new(transaction, envelope.network_id, envelope.chain_id))
    }
}

impl RequestCosignatureDataSchema {
    pub fn parse(json: &str, factory: &dyn TransactionFactory) -> QrResult<CosignatureQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::RequestCosignature)?, factory)
    }

    pub(crate) fn from_envelope(envelope: Envelope, factory: &dyn TransactionFactory) -> QrResult<CosignatureQr> {
        let transaction = rebuild_transaction(&envelope.data, factory)?;
        Ok(CosignatureQr::new(transaction, envelope.network_id, envelope.chain_id))
    }
}

fn payload_data(transaction: &dyn Transaction) -> Value {
    json!({ "payload": transaction.serialize() })
}

fn rebuild_transaction(data: &Value, factory: &dyn TransactionFactory) -> QrResult<Arc<dyn Transaction>> {
    let payload = require_json_string(data, "payload")?;
    factory.create_from_payload(&payload).map_err(|e| {
        log_warn!("schema::transaction", "Transaction factory rejected payload", payload = payload);
        QrError::collaborator("transaction factory", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::QrCodeBase;
    use crate::error::ErrorKind;
    use crate::sdk::{RawTransaction, SdkResult};
    use crate::types::NetworkType;

    const PAYLOAD: &str = "B000000000000000000000000000000000000000000000000000000000000000";

    fn transaction() -> Arc<dyn Transaction> {
        RawTransaction::create_from_payload(PAYLOAD).unwrap()
    }

    #[test]
    fn test_get_data() {
        let qr = TransactionQr::new(transaction(), NetworkType::MIJIN_TEST, "no-chain-id");
        assert_eq!(
            RequestTransactionDataSchema::get_data(&qr).unwrap(),
            json!({"payload": PAYLOAD})
        );
    }

    #[test]
    fn test_parse_transaction_roundtrip() {
        let qr = TransactionQr::new(transaction(), NetworkType::MIJIN_TEST, "no-chain-id");
        let parsed = RequestTransactionDataSchema::parse(&qr.to_json().unwrap(), &RawTransaction::create_from_payload).unwrap();

        assert_eq!(parsed.transaction().serialize(), PAYLOAD);
        assert_eq!(parsed.generation_hash(), "no-chain-id");
    }

    #[test]
    fn test_parse_cosignature_roundtrip() {
        let qr = CosignatureQr::new(transaction(), NetworkType::MIJIN_TEST, "no-chain-id");
        let json = qr.to_json().unwrap();

        assert!(json.contains("\"type\":4"));
        let parsed = RequestCosignatureDataSchema::parse(&json, &RawTransaction::create_from_payload).unwrap();
        assert_eq!(parsed.transaction().serialize(), PAYLOAD);
    }

    #[test]
    fn test_transaction_envelope_is_not_a_cosignature() {
        let qr = TransactionQr::new(transaction(), NetworkType::MIJIN_TEST, "no-chain-id");
        let err = RequestCosignatureDataSchema::parse(&qr.to_json().unwrap(), &RawTransaction::create_from_payload).unwrap_err();

        assert!(matches!(err, QrError::InvalidType("CosignatureQR")));
    }

    #[test]
    fn test_factory_failure_is_collaborator_error() {
        let failing = |_: &str| -> SdkResult<Arc<dyn Transaction>> { Err("unknown entity type".into()) };
        let qr = TransactionQr::new(transaction(), NetworkType::MIJIN_TEST, "no-chain-id");
        let err = RequestTransactionDataSchema::parse(&qr.to_json().unwrap(), &failing).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Collaborator);
        assert!(err.to_string().contains("unknown entity type"));
    }
}
