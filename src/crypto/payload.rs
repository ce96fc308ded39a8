//! Encrypted payload wire shape

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{QrError, QrResult};
use crate::utils::{as_json_object, parse_json_value, require_json_string};

/// `{ciphertext, salt}` produced by [`EncryptionService`](super::EncryptionService).
///
/// `ciphertext` starts with the hex encoded IV (32 characters) followed by
/// the base64 AES ciphertext; `salt` is hex. Neither is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    pub ciphertext: String,
    pub salt: String,
}

impl EncryptedPayload {
    pub fn new(ciphertext: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            salt: salt.into(),
        }
    }

    /// Parse a JSON document holding `ciphertext` and `salt`
    pub fn from_json(json: &str) -> QrResult<Self> {
        let value = parse_json_value(json)?;
        Self::from_value(&value)
    }

    /// Read both fields from an already parsed JSON object
    pub fn from_value(value: &Value) -> QrResult<Self> {
        as_json_object(value, "EncryptedPayload")?;
        let ciphertext = require_json_string(value, "ciphertext")?;
        let salt = require_json_string(value, "salt")?;
        Ok(Self { ciphertext, salt })
    }

    /// Whether `value` has both `ciphertext` and `salt` keys
    pub fn is_data_encrypted(value: &Value) -> bool {
        value
            .as_object()
            .map(|obj| obj.contains_key("ciphertext") && obj.contains_key("salt"))
            .unwrap_or(false)
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "ciphertext": self.ciphertext,
            "salt": self.salt,
        })
    }

    pub fn to_json(&self) -> QrResult<String> {
        serde_json::to_string(self).map_err(QrError::from)
    }
}
