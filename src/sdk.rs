//! Blockchain SDK seams
//!
//! Transactions and signed transactions are opaque to this crate. Callers
//! inject the codec of their SDK through the traits below; closures with the
//! matching signature implement them directly.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Error returned by an injected SDK capability
pub type SdkError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for SDK capabilities
pub type SdkResult<T> = Result<T, SdkError>;

/// Unsigned transaction that can be serialized to its binary payload
pub trait Transaction: fmt::Debug + Send + Sync {
    /// Hex encoded binary payload
    fn serialize(&self) -> String;
}

/// Rebuilds a transaction from its hex payload (`createFromPayload`)
pub trait TransactionFactory {
    fn create_from_payload(&self, payload: &str) -> SdkResult<Arc<dyn Transaction>>;
}

impl<F> TransactionFactory for F
where
    F: Fn(&str) -> SdkResult<Arc<dyn Transaction>>,
{
    fn create_from_payload(&self, payload: &str) -> SdkResult<Arc<dyn Transaction>> {
        self(payload)
    }
}

/// Signed transaction (or cosignature) in its JSON transfer form
pub trait SignedTransaction: fmt::Debug + Send + Sync {
    fn to_dto(&self) -> Value;
}

/// Rebuilds a signed transaction from its JSON transfer form
pub trait SignedTransactionMapper {
    fn map(&self, dto: &Value) -> SdkResult<Arc<dyn SignedTransaction>>;
}

impl<F> SignedTransactionMapper for F
where
    F: Fn(&Value) -> SdkResult<Arc<dyn SignedTransaction>>,
{
    fn map(&self, dto: &Value) -> SdkResult<Arc<dyn SignedTransaction>> {
        self(dto)
    }
}

/// Transaction kept as its validated hex payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    payload: String,
}

impl RawTransaction {
    /// Accepts any non-empty, even length hex string
    pub fn create_from_payload(payload: &str) -> SdkResult<Arc<dyn Transaction>> {
        if payload.is_empty() {
            return Err("transaction payload is empty".into());
        }
        hex::decode(payload)?;
        Ok(Arc::new(RawTransaction {
            payload: payload.to_string(),
        }))
    }
}

impl Transaction for RawTransaction {
    fn serialize(&self) -> String {
        self.payload.clone()
    }
}

/// Signed transaction kept as its JSON transfer form
#[derive(Debug, Clone, PartialEq)]
pub struct RawSignedTransaction(pub Value);

impl RawSignedTransaction {
    pub fn map(dto: &Value) -> SdkResult<Arc<dyn SignedTransaction>> {
        if !dto.is_object() {
            return Err("signed transaction must be a JSON object".into());
        }
        Ok(Arc::new(RawSignedTransaction(dto.clone())))
    }
}

impl SignedTransaction for RawSignedTransaction {
    fn to_dto(&self) -> Value {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_transaction_roundtrip() {
        let tx = RawTransaction::create_from_payload("B000DEADBEEF").unwrap();
        assert_eq!(tx.serialize(), "B000DEADBEEF");
    }

    #[test]
    fn test_raw_transaction_rejects_bad_payload() {
        assert!(RawTransaction::create_from_payload("").is_err());
        assert!(RawTransaction::create_from_payload("XYZ").is_err());
    }

    #[test]
    fn test_closure_is_a_factory() {
        let factory = |payload: &str| RawTransaction::create_from_payload(payload);
        let tx = factory.create_from_payload("00").unwrap();
        assert_eq!(tx.serialize(), "00");
    }

    #[test]
    fn test_raw_signed_transaction() {
        let dto = json!({"payload": "AA", "hash": "BB"});
        let signed = RawSignedTransaction::map(&dto).unwrap();
        assert_eq!(signed.to_dto(), dto);
        assert!(RawSignedTransaction::map(&json!("AA")).is_err());
    }
}
