//! Shared types for NIP-7 QR codes
//!
//! The discriminant enumeration and the opaque network identifier are
//! defined here since both the schemas and the generator depend on them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::QrError;

/// Envelope version written by every schema
pub const QR_CODE_VERSION: u8 = 3;

// =============================================================================
// QR Code Types
// =============================================================================

/// Closed set of artifact discriminants (`type` field of the envelope)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QrCodeType {
    AddContact = 1,
    ExportAccount = 2,
    RequestTransaction = 3,
    RequestCosignature = 4,
    ExportMnemonic = 5,
    ExportObject = 6,
    ExportAddress = 7,
    SignedTransaction = 8,
    CosignatureSignedTransaction = 9,
}

impl QrCodeType {
    pub const ALL: [QrCodeType; 9] = [
        QrCodeType::AddContact,
        QrCodeType::ExportAccount,
        QrCodeType::RequestTransaction,
        QrCodeType::RequestCosignature,
        QrCodeType::ExportMnemonic,
        QrCodeType::ExportObject,
        QrCodeType::ExportAddress,
        QrCodeType::SignedTransaction,
        QrCodeType::CosignatureSignedTransaction,
    ];

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Artifact name used in error messages
    pub fn artifact_name(&self) -> &'static str {
        match self {
            QrCodeType::AddContact => "ContactQR",
            QrCodeType::ExportAccount => "AccountQR",
            QrCodeType::RequestTransaction => "TransactionQR",
            QrCodeType::RequestCosignature => "CosignatureQR",
            QrCodeType::ExportMnemonic => "MnemonicQR",
            QrCodeType::ExportObject => "ObjectQR",
            QrCodeType::ExportAddress => "AddressQR",
            QrCodeType::SignedTransaction => "SignedTransactionQR",
            QrCodeType::CosignatureSignedTransaction => "CosignatureSignedTransactionQR",
        }
    }
}

impl TryFrom<u64> for QrCodeType {
    type Error = QrError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        QrCodeType::ALL
            .iter()
            .copied()
            .find(|t| u64::from(t.as_u8()) == value)
            .ok_or_else(|| QrError::UnrecognizedType(value.to_string()))
    }
}

impl fmt::Display for QrCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.as_u8())
    }
}

impl Serialize for QrCodeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for QrCodeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        QrCodeType::try_from(raw).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Network Types
// =============================================================================

/// Target network identifier, passed through untouched
///
/// Any non-negative JSON integer is accepted, not only the known constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkType(pub u64);

impl NetworkType {
    pub const MAIN_NET: NetworkType = NetworkType(104);
    pub const TEST_NET: NetworkType = NetworkType(152);
    pub const MIJIN: NetworkType = NetworkType(96);
    pub const MIJIN_TEST: NetworkType = NetworkType(144);
}

impl From<u8> for NetworkType {
    fn from(value: u8) -> Self {
        NetworkType(u64::from(value))
    }
}

impl From<u64> for NetworkType {
    fn from(value: u64) -> Self {
        NetworkType(value)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_code_type_values() {
        assert_eq!(QrCodeType::AddContact.as_u8(), 1);
        assert_eq!(QrCodeType::ExportAddress.as_u8(), 7);
        assert_eq!(QrCodeType::CosignatureSignedTransaction.as_u8(), 9);
    }

    #[test]
    fn test_qr_code_type_try_from() {
        for t in QrCodeType::ALL {
            assert_eq!(QrCodeType::try_from(u64::from(t.as_u8())).unwrap(), t);
        }
        assert!(QrCodeType::try_from(0).is_err());
        assert!(QrCodeType::try_from(10).is_err());
    }

    #[test]
    fn test_qr_code_type_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&QrCodeType::ExportMnemonic).unwrap(), "5");
        let parsed: QrCodeType = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, QrCodeType::ExportAccount);
        assert!(serde_json::from_str::<QrCodeType>("99").is_err());
    }

    #[test]
    fn test_network_type_is_transparent() {
        assert_eq!(serde_json::to_string(&NetworkType::TEST_NET).unwrap(), "152");
        assert_eq!(serde_json::to_string(&NetworkType::from(1000u64)).unwrap(), "1000");
        assert_eq!(NetworkType::from(152u8), NetworkType::TEST_NET);
    }
}
