//! NIP-7 envelope
//!
//! Every QR code serializes to the same five field object:
//! `{"v": 3, "type": .., "network_id": .., "chain_id": .., "data": ..}`.
//! Only `data` differs between artifact types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{QrError, QrResult};
use crate::types::{NetworkType, QrCodeType, QR_CODE_VERSION};
use crate::utils::{as_integral_u64, as_json_object, is_truthy, parse_json_value, require_json_field};

/// Top-level wire structure shared by all artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub v: u8,
    #[serde(rename = "type")]
    pub qr_type: QrCodeType,
    pub network_id: NetworkType,
    pub chain_id: String,
    pub data: Value,
}

impl Envelope {
    /// Assemble an envelope at the current version
    pub fn new(qr_type: QrCodeType, network_id: NetworkType, chain_id: impl Into<String>, data: Value) -> Self {
        Self {
            v: QR_CODE_VERSION,
            qr_type,
            network_id,
            chain_id: chain_id.into(),
            data,
        }
    }

    pub fn to_json(&self) -> QrResult<String> {
        serde_json::to_string(self).map_err(QrError::from)
    }

    /// Parse `json` as an envelope of the `expected` type.
    ///
    /// Only `type` is checked against the schema; `v` is read but any version
    /// is accepted so that older and newer encodings still decode.
    pub fn parse(json: &str, expected: QrCodeType) -> QrResult<Self> {
        let value = parse_json_value(json)?;
        Self::from_value(value, expected)
    }

    pub fn from_value(mut value: Value, expected: QrCodeType) -> QrResult<Self> {
        let name = expected.artifact_name();
        as_json_object(&value, name)?;

        let type_matches = value
            .get("type")
            .filter(|t| is_truthy(t))
            .and_then(as_integral_u64)
            .map(|t| t == u64::from(expected.as_u8()))
            .unwrap_or(false);
        if !type_matches {
            return Err(QrError::InvalidType(name));
        }

        require_json_field(&value, "data")?;

        let network_id = match as_integral_u64(require_json_field(&value, "network_id")?) {
            Some(id) => NetworkType(id),
            None => return Err(QrError::invalid_field("network_id", "expected an integer")),
        };

        let chain_id = match require_json_field(&value, "chain_id")? {
            Value::String(s) => s.clone(),
            _ => return Err(QrError::invalid_field("chain_id", "expected a string")),
        };

        let v = value
            .get("v")
            .and_then(as_integral_u64)
            .and_then(|v| u8::try_from(v).ok())
            .unwrap_or(QR_CODE_VERSION);

        let data = value
            .as_object_mut()
            .and_then(|obj| obj.remove("data"))
            .unwrap_or(Value::Null);

        Ok(Self {
            v,
            qr_type: expected,
            network_id,
            chain_id,
            data,
        })
    }
}
