use serde_json::Value;

use crate::schema::ExportObjectDataSchema;
use crate::types::{NetworkType, QrCodeType};

/// Arbitrary JSON carried verbatim as `data`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectQr {
    object: Value,
    network_type: NetworkType,
    generation_hash: String,
}

impl ObjectQr {
    pub fn new(object: Value, network_type: NetworkType, generation_hash: impl Into<String>) -> Self {
        Self {
            object,
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn object(&self) -> &Value {
        &self.object
    }
}

impl_qr_code_base!(ObjectQr, ExportObjectDataSchema, QrCodeType::ExportObject, 10);
