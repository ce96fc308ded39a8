//! Export address schema: `data = {name, address}`

use serde_json::{json, Value};

use super::QrCodeDataSchema;
use crate::artifact::AddressQr;
use crate::envelope::Envelope;
use crate::error::QrResult;
use crate::types::QrCodeType;
use crate::utils::require_json_string;

pub struct ExportAddressDataSchema;

impl QrCodeDataSchema for ExportAddressDataSchema {
    type Artifact = AddressQr;

    fn get_data(qr: &AddressQr) -> QrResult<Value> {
        Ok(json!({
            "name": qr.name(),
            "address": qr.account_address(),
        }))
    }
}

impl ExportAddressDataSchema {
    pub fn parse(json: &str) -> QrResult<AddressQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::ExportAddress)?)
    }

    pub(crate) fn from_envelope(envelope: Envelope) -> QrResult<AddressQr> {
        let name = require_json_string(&envelope.data, "name")?;
        let address = require_json_string(&envelope.data, "address")?;
        Ok(AddressQr::new(name, address, envelope.network_id, envelope.chain_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::QrCodeBase;
    use crate::error::QrError;
    use crate::types::NetworkType;

    #[test]
    fn test_parse_roundtrip() {
        let address = AddressQr::new(
            "test-address-1",
            "TA6QZTYPOIYQYR5NRY4WQ2WRQUX2FN5UK2DO6DI",
            NetworkType::TEST_NET,
            "no-chain-id",
        );
        let json = address.to_json().unwrap();
        let parsed = ExportAddressDataSchema::parse(&json).unwrap();

        assert!(json.contains("\"address\":\"TA6QZTYPOIYQYR5NRY4WQ2WRQUX2FN5UK2DO6DI\""));
        assert_eq!(parsed, address);
    }

    #[test]
    fn test_parse_rejects_contact_envelope() {
        let contact = crate::artifact::ContactQr::new("x", "AB", NetworkType::TEST_NET, "");
        let err = ExportAddressDataSchema::parse(&contact.to_json().unwrap()).unwrap_err();

        assert!(matches!(err, QrError::InvalidType("AddressQR")));
    }
}
