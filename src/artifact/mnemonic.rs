use bip39::{Language, Mnemonic};
use std::fmt;
use zeroize::Zeroizing;

use crate::error::{QrError, QrResult};
use crate::schema::ExportMnemonicDataSchema;
use crate::types::{NetworkType, QrCodeType};

/// Mnemonic pass phrase export, optionally password protected
#[derive(Clone, PartialEq, Eq)]
pub struct MnemonicQr {
    mnemonic_plain_text: Zeroizing<String>,
    password: Option<Zeroizing<String>>,
    network_type: NetworkType,
    generation_hash: String,
}

impl MnemonicQr {
    pub fn new(
        mnemonic_plain_text: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
        password: Option<&str>,
    ) -> Self {
        Self {
            mnemonic_plain_text: Zeroizing::new(mnemonic_plain_text.into()),
            password: password.map(|p| Zeroizing::new(p.to_string())),
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    /// Build from a BIP39 mnemonic, storing its space separated words
    pub fn from_mnemonic(
        mnemonic: &Mnemonic,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
        password: Option<&str>,
    ) -> Self {
        Self::new(mnemonic.to_string(), network_type, generation_hash, password)
    }

    pub fn mnemonic_plain_text(&self) -> &str {
        &self.mnemonic_plain_text
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    pub fn is_encrypted(&self) -> bool {
        self.password.is_some()
    }

    /// Parse the phrase as an English BIP39 mnemonic, checksum included
    pub fn mnemonic(&self) -> QrResult<Mnemonic> {
        Mnemonic::parse_in_normalized(Language::English, &self.mnemonic_plain_text)
            .map_err(|_| QrError::InvalidMnemonic)
    }
}

impl fmt::Debug for MnemonicQr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicQr")
            .field("mnemonic_plain_text", &"[REDACTED]")
            .field("encrypted", &self.is_encrypted())
            .field("network_type", &self.network_type)
            .field("generation_hash", &self.generation_hash)
            .finish()
    }
}

impl_qr_code_base!(MnemonicQr, ExportMnemonicDataSchema, QrCodeType::ExportMnemonic, 20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mnemonic_roundtrip() {
        let mnemonic = Mnemonic::from_entropy(&[0u8; 32]).unwrap();
        let qr = MnemonicQr::from_mnemonic(&mnemonic, NetworkType::MIJIN_TEST, "no-chain-id", None);

        assert_eq!(qr.mnemonic_plain_text().split(' ').count(), 24);
        assert_eq!(qr.mnemonic().unwrap(), mnemonic);
    }

    #[test]
    fn test_mnemonic_rejects_non_bip39_phrase() {
        let qr = MnemonicQr::new("not a real phrase", NetworkType::MIJIN_TEST, "no-chain-id", None);
        assert!(matches!(qr.mnemonic(), Err(QrError::InvalidMnemonic)));
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let qr = MnemonicQr::new("abandon abandon", NetworkType::MIJIN_TEST, "no-chain-id", None);
        assert!(!format!("{:?}", qr).contains("abandon"));
    }
}
