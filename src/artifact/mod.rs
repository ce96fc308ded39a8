//! QR code artifacts
//!
//! One immutable value type per [`QrCodeType`]. Every artifact carries the
//! network and the generation hash of the chain it belongs to, and encodes
//! itself through the schema of its type. [`QrCode`] is the closed sum of
//! all artifacts, as produced by [`crate::QrCodeGenerator::from_json`].

use crate::envelope::Envelope;
use crate::error::QrResult;
use crate::qr::{OutputFormat, QrCodeSettings, QrRenderer};
use crate::types::{NetworkType, QrCodeType};

/// Shared envelope accessors, delegating `data` to the artifact's schema
macro_rules! impl_qr_code_base {
    ($artifact:ty, $schema:ty, $qr_type:expr, $type_number:expr) => {
        impl $crate::artifact::QrCodeBase for $artifact {
            fn qr_type(&self) -> $crate::types::QrCodeType {
                $qr_type
            }

            fn network_type(&self) -> $crate::types::NetworkType {
                self.network_type
            }

            fn generation_hash(&self) -> &str {
                &self.generation_hash
            }

            fn type_number(&self) -> u8 {
                $type_number
            }

            fn to_envelope(&self) -> $crate::error::QrResult<$crate::envelope::Envelope> {
                <$schema as $crate::schema::QrCodeDataSchema>::to_envelope(self)
            }
        }
    };
}

mod account;
mod address;
mod contact;
mod mnemonic;
mod object;
mod signed_transaction;
mod transaction;

pub use account::AccountQr;
pub use address::AddressQr;
pub use contact::ContactQr;
pub use mnemonic::MnemonicQr;
pub use object::ObjectQr;
pub use signed_transaction::{CosignatureSignedTransactionQr, SignedTransactionQr};
pub use transaction::{CosignatureQr, TransactionQr};

/// Behaviour shared by every QR code artifact
pub trait QrCodeBase {
    fn qr_type(&self) -> QrCodeType;

    fn network_type(&self) -> NetworkType;

    /// Generation hash of the chain, written as `chain_id`
    fn generation_hash(&self) -> &str;

    /// QR symbol version hint passed to renderers
    fn type_number(&self) -> u8;

    fn to_envelope(&self) -> QrResult<Envelope>;

    /// Compact envelope JSON, the exact string encoded in the QR code
    fn to_json(&self) -> QrResult<String> {
        self.to_envelope()?.to_json()
    }

    /// Hand the envelope to `renderer` after checking it fits one symbol
    fn render(
        &self,
        renderer: &dyn QrRenderer,
        format: OutputFormat,
        settings: &QrCodeSettings,
    ) -> QrResult<String> {
        let json = self.to_json()?;
        settings.correction_level.check_capacity(&json)?;
        renderer.render(&json, self.type_number(), format, settings)
    }

    /// PNG data URL
    fn to_base64(&self, renderer: &dyn QrRenderer, settings: &QrCodeSettings) -> QrResult<String> {
        self.render(renderer, OutputFormat::DataUrl, settings)
    }

    fn to_ascii(&self, renderer: &dyn QrRenderer, settings: &QrCodeSettings) -> QrResult<String> {
        self.render(renderer, OutputFormat::Ascii, settings)
    }

    fn to_svg(&self, renderer: &dyn QrRenderer, settings: &QrCodeSettings) -> QrResult<String> {
        self.render(renderer, OutputFormat::Svg, settings)
    }
}

/// Any decoded QR code
#[derive(Debug, Clone)]
pub enum QrCode {
    Contact(ContactQr),
    Account(AccountQr),
    Transaction(TransactionQr),
    Cosignature(CosignatureQr),
    Mnemonic(MnemonicQr),
    Object(ObjectQr),
    Address(AddressQr),
    SignedTransaction(SignedTransactionQr),
    CosignatureSignedTransaction(CosignatureSignedTransactionQr),
}

impl QrCode {
    fn inner(&self) -> &dyn QrCodeBase {
        match self {
            QrCode::Contact(qr) => qr,
            QrCode::Account(qr) => qr,
            QrCode::Transaction(qr) => qr,
            QrCode::Cosignature(qr) => qr,
            QrCode::Mnemonic(qr) => qr,
            QrCode::Object(qr) => qr,
            QrCode::Address(qr) => qr,
            QrCode::SignedTransaction(qr) => qr,
            QrCode::CosignatureSignedTransaction(qr) => qr,
        }
    }

    pub fn as_contact(&self) -> Option<&ContactQr> {
        match self {
            QrCode::Contact(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_account(&self) -> Option<&AccountQr> {
        match self {
            QrCode::Account(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_transaction(&self) -> Option<&TransactionQr> {
        match self {
            QrCode::Transaction(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_cosignature(&self) -> Option<&CosignatureQr> {
        match self {
            QrCode::Cosignature(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_mnemonic(&self) -> Option<&MnemonicQr> {
        match self {
            QrCode::Mnemonic(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectQr> {
        match self {
            QrCode::Object(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&AddressQr> {
        match self {
            QrCode::Address(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_signed_transaction(&self) -> Option<&SignedTransactionQr> {
        match self {
            QrCode::SignedTransaction(qr) => Some(qr),
            _ => None,
        }
    }

    pub fn as_cosignature_signed_transaction(&self) -> Option<&CosignatureSignedTransactionQr> {
        match self {
            QrCode::CosignatureSignedTransaction(qr) => Some(qr),
            _ => None,
        }
    }
}

impl QrCodeBase for QrCode {
    fn qr_type(&self) -> QrCodeType {
        self.inner().qr_type()
    }

    fn network_type(&self) -> NetworkType {
        self.inner().network_type()
    }

    fn generation_hash(&self) -> &str {
        self.inner().generation_hash()
    }

    fn type_number(&self) -> u8 {
        self.inner().type_number()
    }

    fn to_envelope(&self) -> QrResult<Envelope> {
        self.inner().to_envelope()
    }
}

macro_rules! impl_from_artifact {
    ($($variant:ident($artifact:ty)),* $(,)?) => {
        $(
            impl From<$artifact> for QrCode {
                fn from(qr: $artifact) -> Self {
                    QrCode::$variant(qr)
                }
            }
        )*
    };
}

impl_from_artifact!(
    Contact(ContactQr),
    Account(AccountQr),
    Transaction(TransactionQr),
    Cosignature(CosignatureQr),
    Mnemonic(MnemonicQr),
    Object(ObjectQr),
    Address(AddressQr),
    SignedTransaction(SignedTransactionQr),
    CosignatureSignedTransaction(CosignatureSignedTransactionQr),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QrError;
    use crate::qr::ErrorCorrectionLevel;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records what it was asked to render
    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(String, u8, OutputFormat)>>,
    }

    impl QrRenderer for RecordingRenderer {
        fn render(
            &self,
            json: &str,
            type_number: u8,
            format: OutputFormat,
            _settings: &QrCodeSettings,
        ) -> QrResult<String> {
            self.calls.borrow_mut().push((json.to_string(), type_number, format));
            Ok(format!("rendered:{}", format.as_str()))
        }
    }

    fn contact() -> ContactQr {
        ContactQr::new(
            "test-contact-1",
            "C5C55181284607954E56CD46DE85F4F3EF4CC713CC2B95000FA741998558D268",
            NetworkType::MIJIN_TEST,
            "no-chain-id",
        )
    }

    #[test]
    fn test_render_formats() {
        let renderer = RecordingRenderer::default();
        let qr = contact();
        let settings = QrCodeSettings::default();

        qr.to_base64(&renderer, &settings).unwrap();
        qr.to_ascii(&renderer, &settings).unwrap();
        qr.to_svg(&renderer, &settings).unwrap();

        let calls = renderer.calls.borrow();
        let formats: Vec<_> = calls.iter().map(|(_, _, f)| *f).collect();
        assert_eq!(formats, vec![OutputFormat::DataUrl, OutputFormat::Ascii, OutputFormat::Svg]);
        assert_eq!(calls[0].0, qr.to_json().unwrap());
        assert!(calls.iter().all(|(_, type_number, _)| *type_number == 15));
    }

    #[test]
    fn test_type_numbers() {
        use crate::sdk::{RawSignedTransaction, RawTransaction};

        let network = NetworkType::MIJIN_TEST;
        let tx = RawTransaction::create_from_payload("B000").unwrap();
        let signed = RawSignedTransaction::map(&json!({"hash": "AB"})).unwrap();

        let expected: Vec<(QrCode, u8)> = vec![
            (contact().into(), 15),
            (AccountQr::new("AB", network, "", None).into(), 15),
            (TransactionQr::new(tx.clone(), network, "").into(), 40),
            (CosignatureQr::new(tx, network, "").into(), 40),
            (MnemonicQr::new("abandon", network, "", None).into(), 20),
            (ObjectQr::new(json!({}), network, "").into(), 10),
            (AddressQr::new("a", "TA6Q", network, "").into(), 15),
            (SignedTransactionQr::new(signed.clone(), network, "").into(), 40),
            (CosignatureSignedTransactionQr::new(signed, network, "").into(), 40),
        ];

        let renderer = RecordingRenderer::default();
        for (qr, type_number) in &expected {
            assert_eq!(qr.type_number(), *type_number, "{}", qr.qr_type());
            qr.to_ascii(&renderer, &QrCodeSettings::default()).unwrap();
        }

        let received: Vec<u8> = renderer.calls.borrow().iter().map(|(_, t, _)| *t).collect();
        let wanted: Vec<u8> = expected.iter().map(|(_, t)| *t).collect();
        assert_eq!(received, wanted);
    }

    #[test]
    fn test_render_rejects_oversized_payload() {
        let renderer = RecordingRenderer::default();
        let big = ObjectQr::new(json!({"blob": "x".repeat(2000)}), NetworkType::MIJIN_TEST, "no-chain-id");
        let settings = QrCodeSettings::default().with_correction_level(ErrorCorrectionLevel::H);

        let err = big.to_base64(&renderer, &settings).unwrap_err();
        assert!(matches!(err, QrError::PayloadTooLarge(_, 1273)));
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn test_qr_code_delegates() {
        let qr: QrCode = contact().into();

        assert_eq!(qr.qr_type(), QrCodeType::AddContact);
        assert_eq!(qr.network_type(), NetworkType::MIJIN_TEST);
        assert_eq!(qr.generation_hash(), "no-chain-id");
        assert_eq!(qr.to_json().unwrap(), contact().to_json().unwrap());
        assert!(qr.as_contact().is_some());
        assert!(qr.as_account().is_none());
    }
}
