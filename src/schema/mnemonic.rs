//! Export mnemonic schema
//!
//! Same plain-or-encrypted layout as account exports, with the plain phrase
//! stored under `plainMnemonic`. Whether the phrase is a valid BIP39
//! mnemonic is not checked here; see [`MnemonicQr::mnemonic`].

use serde_json::Value;

use super::QrCodeDataSchema;
use crate::artifact::MnemonicQr;
use crate::crypto::ProtectedField;
use crate::envelope::Envelope;
use crate::error::{QrError, QrResult};
use crate::log_warn;
use crate::types::QrCodeType;

/// Key holding an unencrypted mnemonic
pub const PLAIN_MNEMONIC_FIELD: &str = "plainMnemonic";

pub struct ExportMnemonicDataSchema;

impl QrCodeDataSchema for ExportMnemonicDataSchema {
    type Artifact = MnemonicQr;

    fn get_data(qr: &MnemonicQr) -> QrResult<Value> {
        let field = ProtectedField::seal(qr.mnemonic_plain_text(), qr.password())?;
        Ok(field.to_data(PLAIN_MNEMONIC_FIELD))
    }
}

impl ExportMnemonicDataSchema {
    pub fn parse(json: &str, password: Option<&str>) -> QrResult<MnemonicQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::ExportMnemonic)?, password)
    }

    pub(crate) fn from_envelope(envelope: Envelope, password: Option<&str>) -> QrResult<MnemonicQr> {
        let plain_text = read_mnemonic(&envelope.data, password).map_err(|e| {
            log_warn!("schema::mnemonic", "Could not parse mnemonic pass phrase", cause = e);
            e.collapse(QrCodeType::ExportMnemonic)
        })?;

        Ok(MnemonicQr::new(
            plain_text,
            envelope.network_id,
            envelope.chain_id,
            password,
        ))
    }
}

fn read_mnemonic(data: &Value, password: Option<&str>) -> QrResult<String> {
    let plain_text = ProtectedField::from_data(data, PLAIN_MNEMONIC_FIELD)?.reveal(password)?;
    if plain_text.is_empty() {
        return Err(QrError::InvalidMnemonic);
    }
    Ok(plain_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::QrCodeBase;
    use crate::types::NetworkType;
    use serde_json::json;

    const PHRASE: &str = "stumble shoot spawn bitter forest waste attitude chest square kite dawn photo twice message bargain trap spin vote lamp wire also either else pupil";

    #[test]
    fn test_get_data_plain() {
        let mnemonic = MnemonicQr::new(PHRASE, NetworkType::MIJIN_TEST, "no-chain-id", None);
        let data = ExportMnemonicDataSchema::get_data(&mnemonic).unwrap();

        assert_eq!(data, json!({"plainMnemonic": PHRASE}));
    }

    #[test]
    fn test_parse_encrypted_roundtrip() {
        let mnemonic = MnemonicQr::new(PHRASE, NetworkType::MIJIN_TEST, "no-chain-id", Some("password"));
        let json = mnemonic.to_json().unwrap();
        let parsed = ExportMnemonicDataSchema::parse(&json, Some("password")).unwrap();

        assert!(!json.contains("stumble"));
        assert_eq!(parsed.mnemonic_plain_text(), PHRASE);
    }

    #[test]
    fn test_parse_wrong_password() {
        let mnemonic = MnemonicQr::new(PHRASE, NetworkType::MIJIN_TEST, "no-chain-id", Some("password"));
        let err = ExportMnemonicDataSchema::parse(&mnemonic.to_json().unwrap(), Some("wrong-password")).unwrap_err();

        assert_eq!(err.to_string(), "Could not parse mnemonic pass phrase.");
    }

    #[test]
    fn test_parse_empty_plain_mnemonic() {
        let json = json!({"v": 3, "type": 5, "network_id": 144, "chain_id": "", "data": {"plainMnemonic": ""}}).to_string();
        assert!(matches!(
            ExportMnemonicDataSchema::parse(&json, None),
            Err(QrError::MnemonicParse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_account_envelope() {
        let json = json!({"v": 3, "type": 2, "network_id": 144, "chain_id": "", "data": {}}).to_string();
        assert!(matches!(
            ExportMnemonicDataSchema::parse(&json, None),
            Err(QrError::InvalidType("MnemonicQR"))
        ));
    }
}
