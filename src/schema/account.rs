//! Export account schema
//!
//! `data` is either `{privateKey}` or the `{ciphertext, salt}` of the
//! private key encrypted with the export password. Every failure after the
//! envelope checks surfaces as "Could not parse account information.".

use serde_json::Value;

use super::QrCodeDataSchema;
use crate::artifact::AccountQr;
use crate::crypto::ProtectedField;
use crate::envelope::Envelope;
use crate::error::{QrError, QrResult};
use crate::log_warn;
use crate::types::QrCodeType;

/// Key holding an unencrypted private key
pub const PLAIN_PRIVATE_KEY_FIELD: &str = "privateKey";

/// Accepted private key lengths in hex characters
pub const PRIVATE_KEY_LENGTHS: [usize; 2] = [64, 66];

pub struct ExportAccountDataSchema;

impl QrCodeDataSchema for ExportAccountDataSchema {
    type Artifact = AccountQr;

    fn get_data(qr: &AccountQr) -> QrResult<Value> {
        let field = ProtectedField::seal(qr.account_private_key(), qr.password())?;
        Ok(field.to_data(PLAIN_PRIVATE_KEY_FIELD))
    }
}

impl ExportAccountDataSchema {
    pub fn parse(json: &str, password: Option<&str>) -> QrResult<AccountQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::ExportAccount)?, password)
    }

    pub(crate) fn from_envelope(envelope: Envelope, password: Option<&str>) -> QrResult<AccountQr> {
        let private_key = read_private_key(&envelope.data, password).map_err(|e| {
            log_warn!("schema::account", "Could not parse account information", cause = e);
            e.collapse(QrCodeType::ExportAccount)
        })?;

        Ok(AccountQr::new(
            private_key,
            envelope.network_id,
            envelope.chain_id,
            password,
        ))
    }
}

fn read_private_key(data: &Value, password: Option<&str>) -> QrResult<String> {
    let private_key = ProtectedField::from_data(data, PLAIN_PRIVATE_KEY_FIELD)?.reveal(password)?;
    if !PRIVATE_KEY_LENGTHS.contains(&private_key.len()) {
        return Err(QrError::InvalidPrivateKey);
    }
    Ok(private_key)
}
