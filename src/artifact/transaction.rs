use std::sync::Arc;

use crate::schema::{RequestCosignatureDataSchema, RequestTransactionDataSchema};
use crate::sdk::Transaction;
use crate::types::{NetworkType, QrCodeType};

/// Request to sign and announce a transaction
#[derive(Debug, Clone)]
pub struct TransactionQr {
    transaction: Arc<dyn Transaction>,
    network_type: NetworkType,
    generation_hash: String,
}

impl TransactionQr {
    pub fn new(
        transaction: Arc<dyn Transaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> Self {
        Self {
            transaction,
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn transaction(&self) -> &Arc<dyn Transaction> {
        &self.transaction
    }
}

/// Request to cosign an aggregate transaction
#[derive(Debug, Clone)]
pub struct CosignatureQr {
    transaction: Arc<dyn Transaction>,
    network_type: NetworkType,
    generation_hash: String,
}

impl CosignatureQr {
    pub fn new(
        transaction: Arc<dyn Transaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> Self {
        Self {
            transaction,
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn transaction(&self) -> &Arc<dyn Transaction> {
        &self.transaction
    }
}

impl_qr_code_base!(TransactionQr, RequestTransactionDataSchema, QrCodeType::RequestTransaction, 40);
impl_qr_code_base!(CosignatureQr, RequestCosignatureDataSchema, QrCodeType::RequestCosignature, 40);
