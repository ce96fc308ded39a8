//! Unified error types for NIP-7 QR codes
//!
//! All decode and encode failures flow through [`QrError`]. Each variant
//! belongs to one [`ErrorKind`] so callers can branch on the category
//! (re-prompt for a password, reject the scan, ...) without matching on
//! individual variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::QrCodeType;

/// Main error type for all QR code operations
#[derive(Error, Debug)]
pub enum QrError {
    #[error("JSON argument cannot be empty.")]
    EmptyJson,

    #[error("Invalid json body in payload! {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object for {0}.")]
    NotAnObject(&'static str),

    #[error("Missing mandatory field with name \"{0}\".")]
    MissingField(&'static str),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid type field value for {0}.")]
    InvalidType(&'static str),

    #[error("Unrecognized QR Code 'type': '{0}'.")]
    UnrecognizedType(String),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("A password is required to decrypt this payload.")]
    PasswordRequired,

    #[error("Decryption failed: {0}")]
    Decryption(&'static str),

    #[error("Encryption failed: {0}")]
    Encryption(&'static str),

    #[error("Invalid private key.")]
    InvalidPrivateKey,

    #[error("Mnemonic pass phrase is not valid!")]
    InvalidMnemonic,

    #[error("Could not parse account information.")]
    AccountParse(#[source] BoxedCause),

    #[error("Could not parse mnemonic pass phrase.")]
    MnemonicParse(#[source] BoxedCause),

    #[error("No {0} was supplied to decode this QR code.")]
    MissingCollaborator(&'static str),

    #[error("{collaborator} failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },

    #[error("Payload too large for single QR code: {0} bytes (max {1})")]
    PayloadTooLarge(usize, usize),

    #[error("Rendering failed: {0}")]
    Render(String),
}

/// Cause kept behind a collapsed error.
///
/// Stored as a trait object so that `source()` yields the inner [`QrError`]
/// itself and `downcast_ref::<QrError>()` succeeds.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Result type for QR operations
pub type QrResult<T> = Result<T, QrError>;

/// Error categories for QR code operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty or syntactically invalid JSON
    MalformedInput,
    /// `type` absent or not the expected discriminant
    SchemaMismatch,
    /// Structurally required field absent
    MissingField,
    /// Decryption failure or post-decryption validation failure
    Cryptographic,
    /// `type` outside the closed set of known discriminants
    UnrecognizedType,
    /// An injected SDK capability is missing or failed
    Collaborator,
    /// Handing the envelope to a renderer failed
    Render,
}

impl QrError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::EmptyJson | QrError::InvalidJson(_) | QrError::NotAnObject(_) => {
                ErrorKind::MalformedInput
            }
            QrError::InvalidType(_) => ErrorKind::SchemaMismatch,
            QrError::MissingField(_) | QrError::InvalidField { .. } => ErrorKind::MissingField,
            QrError::Hex(_)
            | QrError::Base64(_)
            | QrError::PasswordRequired
            | QrError::Decryption(_)
            | QrError::Encryption(_)
            | QrError::InvalidPrivateKey
            | QrError::InvalidMnemonic
            | QrError::AccountParse(_)
            | QrError::MnemonicParse(_) => ErrorKind::Cryptographic,
            QrError::UnrecognizedType(_) => ErrorKind::UnrecognizedType,
            QrError::MissingCollaborator(_) | QrError::Collaborator { .. } => {
                ErrorKind::Collaborator
            }
            QrError::PayloadTooLarge(..) | QrError::Render(_) => ErrorKind::Render,
        }
    }

    /// Collapse any failure into the generic message of the given artifact type.
    ///
    /// Only account and mnemonic exports hide their cause; every other type
    /// keeps the original error.
    pub(crate) fn collapse(self, qr_type: QrCodeType) -> Self {
        match qr_type {
            QrCodeType::ExportAccount => QrError::AccountParse(Box::new(self)),
            QrCodeType::ExportMnemonic => QrError::MnemonicParse(Box::new(self)),
            _ => self,
        }
    }

    /// Underlying error of a collapsed account or mnemonic failure
    pub fn cause(&self) -> Option<&QrError> {
        match self {
            QrError::AccountParse(cause) | QrError::MnemonicParse(cause) => cause.downcast_ref::<QrError>(),
            _ => None,
        }
    }

    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        QrError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn collaborator(collaborator: &'static str, err: impl std::fmt::Display) -> Self {
        QrError::Collaborator {
            collaborator,
            message: err.to_string(),
        }
    }
}
