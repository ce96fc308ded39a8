//! Plain-or-encrypted `data` fields
//!
//! Account and mnemonic exports store their secret either in the clear under
//! a type specific key, or as an [`EncryptedPayload`]. On the wire the branch
//! is only visible through key presence; here it is an explicit variant.

use serde_json::{Map, Value};

use super::{EncryptedPayload, EncryptionService};
use crate::error::{QrError, QrResult};
use crate::utils::{as_json_object, require_json_string};

/// Secret carried in the `data` field of a protected QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectedField {
    Plain(String),
    Encrypted(EncryptedPayload),
}

impl ProtectedField {
    /// Encrypt `secret` when a password is given, keep it plain otherwise
    pub fn seal(secret: &str, password: Option<&str>) -> QrResult<Self> {
        match password {
            Some(password) => Ok(ProtectedField::Encrypted(EncryptionService::encrypt(secret, password)?)),
            None => Ok(ProtectedField::Plain(secret.to_string())),
        }
    }

    /// Read a `data` object; both `ciphertext` and `salt` present means encrypted
    pub fn from_data(data: &Value, plain_key: &'static str) -> QrResult<Self> {
        as_json_object(data, "data")?;
        if EncryptedPayload::is_data_encrypted(data) {
            return Ok(ProtectedField::Encrypted(EncryptedPayload::from_value(data)?));
        }
        Ok(ProtectedField::Plain(require_json_string(data, plain_key)?))
    }

    /// Wire representation, storing plain secrets under `plain_key`
    pub fn to_data(&self, plain_key: &str) -> Value {
        match self {
            ProtectedField::Plain(secret) => {
                let mut obj = Map::new();
                obj.insert(plain_key.to_string(), Value::String(secret.clone()));
                Value::Object(obj)
            }
            ProtectedField::Encrypted(payload) => payload.to_value(),
        }
    }

    /// Recover the secret, decrypting when needed
    pub fn reveal(&self, password: Option<&str>) -> QrResult<String> {
        match self {
            ProtectedField::Plain(secret) => Ok(secret.clone()),
            ProtectedField::Encrypted(payload) => {
                let password = password.ok_or(QrError::PasswordRequired)?;
                EncryptionService::decrypt(payload, password)
            }
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, ProtectedField::Encrypted(_))
    }
}
