use std::sync::Arc;

use crate::schema::{CosignatureSignedTransactionDataSchema, SignedTransactionDataSchema};
use crate::sdk::SignedTransaction;
use crate::types::{NetworkType, QrCodeType};

/// Signed transaction handed back for announcement
#[derive(Debug, Clone)]
pub struct SignedTransactionQr {
    signed_transaction: Arc<dyn SignedTransaction>,
    network_type: NetworkType,
    generation_hash: String,
}

impl SignedTransactionQr {
    pub fn new(
        signed_transaction: Arc<dyn SignedTransaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> Self {
        Self {
            signed_transaction,
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn signed_transaction(&self) -> &Arc<dyn SignedTransaction> {
        &self.signed_transaction
    }
}

/// Cosignature of an aggregate, handed back to the initiator
#[derive(Debug, Clone)]
pub struct CosignatureSignedTransactionQr {
    signed_transaction: Arc<dyn SignedTransaction>,
    network_type: NetworkType,
    generation_hash: String,
}

impl CosignatureSignedTransactionQr {
    pub fn new(
        signed_transaction: Arc<dyn SignedTransaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> Self {
        Self {
            signed_transaction,
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn signed_transaction(&self) -> &Arc<dyn SignedTransaction> {
        &self.signed_transaction
    }
}

impl_qr_code_base!(
    SignedTransactionQr,
    SignedTransactionDataSchema,
    QrCodeType::SignedTransaction,
    40
);
impl_qr_code_base!(
    CosignatureSignedTransactionQr,
    CosignatureSignedTransactionDataSchema,
    QrCodeType::CosignatureSignedTransaction,
    40
);
