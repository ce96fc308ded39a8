use crate::schema::AddContactDataSchema;
use crate::types::{NetworkType, QrCodeType};

/// Contact shared by name and public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQr {
    name: String,
    account_public_key: String,
    network_type: NetworkType,
    generation_hash: String,
}

impl ContactQr {
    pub fn new(
        name: impl Into<String>,
        account_public_key: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account_public_key: account_public_key.into(),
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_public_key(&self) -> &str {
        &self.account_public_key
    }
}

impl_qr_code_base!(ContactQr, AddContactDataSchema, QrCodeType::AddContact, 15);
