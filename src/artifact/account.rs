use std::fmt;
use zeroize::Zeroizing;

use crate::schema::ExportAccountDataSchema;
use crate::types::{NetworkType, QrCodeType};

/// Account export, optionally password protected.
///
/// The private key and password are wiped from memory on drop and never
/// appear in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountQr {
    account_private_key: Zeroizing<String>,
    password: Option<Zeroizing<String>>,
    network_type: NetworkType,
    generation_hash: String,
}

impl AccountQr {
    /// `password` of `None` exports the private key in the clear
    pub fn new(
        account_private_key: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
        password: Option<&str>,
    ) -> Self {
        Self {
            account_private_key: Zeroizing::new(account_private_key.into()),
            password: password.map(|p| Zeroizing::new(p.to_string())),
            network_type,
            generation_hash: generation_hash.into(),
        }
    }

    /// Hex private key
    pub fn account_private_key(&self) -> &str {
        &self.account_private_key
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    pub fn is_encrypted(&self) -> bool {
        self.password.is_some()
    }
}

impl fmt::Debug for AccountQr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountQr")
            .field("account_private_key", &"[REDACTED]")
            .field("encrypted", &self.is_encrypted())
            .field("network_type", &self.network_type)
            .field("generation_hash", &self.generation_hash)
            .finish()
    }
}

impl_qr_code_base!(AccountQr, ExportAccountDataSchema, QrCodeType::ExportAccount, 15);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let account = AccountQr::new(
            "F97AE23C2A28ECEDE6F8D6C447C0A10B55C92DDE9316CCD36C3177B073906978",
            NetworkType::TEST_NET,
            "no-chain-id",
            Some("hunter2"),
        );
        let debug = format!("{:?}", account);

        assert!(!debug.contains("F97AE23C"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("encrypted: true"));
    }
}
