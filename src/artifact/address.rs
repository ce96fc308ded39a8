use crate::schema::ExportAddressDataSchema;
use crate::types::{NetworkType, QrCodeType};

/// Named account address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQr {
    name: String,
    account_address: String,
    network_type: NetworkType,
    generation_hash: String,
}

impl AddressQr {
    pub fn new(
        name: impl Into<String>,
        account_address: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account_address: account_address.into(),
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address in its plain (unformatted) representation
    pub fn account_address(&self) -> &str {
        &self.account_address
    }
}

impl_qr_code_base!(AddressQr, ExportAddressDataSchema, QrCodeType::ExportAddress, 15);
