//! QR code data schemas
//!
//! A schema owns the layout of the envelope's `data` field for one artifact
//! type: [`QrCodeDataSchema::get_data`] builds it, and each schema's `parse`
//! is the decode entry point for its type.

pub mod account;
pub mod address;
pub mod contact;
pub mod mnemonic;
pub mod object;
pub mod signed_transaction;
pub mod transaction;

pub use account::ExportAccountDataSchema;
pub use address::ExportAddressDataSchema;
pub use contact::AddContactDataSchema;
pub use mnemonic::ExportMnemonicDataSchema;
pub use object::ExportObjectDataSchema;
pub use signed_transaction::{CosignatureSignedTransactionDataSchema, SignedTransactionDataSchema};
pub use transaction::{RequestCosignatureDataSchema, RequestTransactionDataSchema};

use serde_json::Value;

use crate::artifact::QrCodeBase;
use crate::envelope::Envelope;
use crate::error::QrResult;

/// Encode contract shared by all schemas
pub trait QrCodeDataSchema {
    type Artifact: QrCodeBase;

    /// Content of the envelope's `data` field
    fn get_data(artifact: &Self::Artifact) -> QrResult<Value>;

    /// Full envelope for `artifact`
    fn to_envelope(artifact: &Self::Artifact) -> QrResult<Envelope> {
        let data = Self::get_data(artifact)?;
        Ok(Envelope::new(
            artifact.qr_type(),
            artifact.network_type(),
            artifact.generation_hash(),
            data,
        ))
    }
}
