//! Signed transaction and cosignature signed transaction schemas
//!
//! `data = {payload}` where `payload` is the JSON transfer form of the signed
//! transaction, rebuilt through an injected [`SignedTransactionMapper`].

use serde_json::{json, Value};
use std::sync::Arc;

use super::QrCodeDataSchema;
use crate::artifact::{CosignatureSignedTransactionQr, SignedTransactionQr};
use crate::envelope::Envelope;
use crate::error::{QrError, QrResult};
use crate::log_warn;
use crate::sdk::{SignedTransaction, SignedTransactionMapper};
use crate::types::QrCodeType;
use crate::utils::require_json_field;

pub struct SignedTransactionDataSchema;

pub struct CosignatureSignedTransactionDataSchema;

impl QrCodeDataSchema for SignedTransactionDataSchema {
    type Artifact = SignedTransactionQr;

    fn get_data(qr: &SignedTransactionQr) -> QrResult<Value> {
        Ok(json!({ "payload": qr.signed_transaction().to_dto() }))
    }
}

impl QrCodeDataSchema for CosignatureSignedTransactionDataSchema {
    type Artifact = CosignatureSignedTransactionQr;

    fn get_data(qr: &CosignatureSignedTransactionQr) -> QrResult<Value> {
        Ok(json!({ "payload": qr.signed_transaction().to_dto() }))
    }
}

impl SignedTransactionDataSchema {
    pub fn parse(json: &str, mapper: &dyn SignedTransactionMapper) -> QrResult<SignedTransactionQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::SignedTransaction)?, mapper)
    }

    pub(crate) fn from_envelope(
        envelope: Envelope,
        mapper: &dyn SignedTransactionMapper,
    ) -> QrResult<SignedTransactionQr> {
        let signed = rebuild_signed(&envelope.data, mapper, "signed transaction mapper")?;
        Ok(SignedTransactionQr::new(signed, envelope.network_id, envelope.chain_id))
    }
}

impl CosignatureSignedTransactionDataSchema {
    pub fn parse(json: &str, mapper: &dyn SignedTransactionMapper) -> QrResult<CosignatureSignedTransactionQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::CosignatureSignedTransaction)?, mapper)
    }

    pub(crate) fn from_envelope(
        envelope: Envelope,
        mapper: &dyn SignedTransactionMapper,
    ) -> QrResult<CosignatureSignedTransactionQr> {
        let signed = rebuild_signed(&envelope.data, mapper, "cosignature signed transaction mapper")?;
        Ok(CosignatureSignedTransactionQr::new(signed, envelope.network_id, envelope.chain_id))
    }
}

fn rebuild_signed(
    data: &Value,
    mapper: &dyn SignedTransactionMapper,
    collaborator: &'static str,
) -> QrResult<Arc<dyn SignedTransaction>> {
    let dto = require_json_field(data, "payload")?;
    mapper.map(dto).map_err(|e| {
        log_warn!("schema::signed_transaction", "Mapper rejected signed payload", collaborator = collaborator);
        QrError::collaborator(collaborator, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::QrCodeBase;
    use crate::error::ErrorKind;
    use crate::sdk::{RawSignedTransaction, SdkResult};
    use crate::types::NetworkType;

    fn signed() -> Arc<dyn SignedTransaction> {
        RawSignedTransaction::map(&json!({
            "payload": "C000",
            "hash": "ABCDEF",
            "signerPublicKey": "C5C55181284607954E56CD46DE85F4F3EF4CC713CC2B95000FA741998558D268",
            "type": 16724,
            "networkType": 152
        }))
        .unwrap()
    }

    #[test]
    fn test_get_data_wraps_dto() {
        let qr = SignedTransactionQr::new(signed(), NetworkType::TEST_NET, "no-chain-id");
        let data = SignedTransactionDataSchema::get_data(&qr).unwrap();

        assert_eq!(data["payload"]["hash"], "ABCDEF");
    }

    #[test]
    fn test_parse_signed_roundtrip() {
        let qr = SignedTransactionQr::new(signed(), NetworkType::TEST_NET, "no-chain-id");
        let parsed = SignedTransactionDataSchema::parse(&qr.to_json().unwrap(), &RawSignedTransaction::map).unwrap();

        assert_eq!(parsed.signed_transaction().to_dto(), signed().to_dto());
    }

    #[test]
    fn test_parse_cosignature_signed_roundtrip() {
        let qr = CosignatureSignedTransactionQr::new(signed(), NetworkType::TEST_NET, "no-chain-id");
        let json = qr.to_json().unwrap();

        assert!(json.contains("\"type\":9"));
        let parsed = CosignatureSignedTransactionDataSchema::parse(&json, &RawSignedTransaction::map).unwrap();
        assert_eq!(parsed.network_type(), NetworkType::TEST_NET);
    }

    #[test]
    fn test_missing_payload() {
        let json = json!({"v": 3, "type": 8, "network_id": 152, "chain_id": "", "data": {}}).to_string();
        assert!(matches!(
            SignedTransactionDataSchema::parse(&json, &RawSignedTransaction::map),
            Err(QrError::MissingField("payload"))
        ));
    }

    #[test]
    fn test_mapper_failure() {
        let failing = |_: &Value| -> SdkResult<Arc<dyn SignedTransaction>> { Err("bad dto".into()) };
        let json = json!({"v": 3, "type": 9, "network_id": 152, "chain_id": "", "data": {"payload": 1}}).to_string();
        let err = CosignatureSignedTransactionDataSchema::parse(&json, &failing).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Collaborator);
    }
}
