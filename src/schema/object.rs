//! Export object schema: `data` is the object itself

use serde_json::Value;

use super::QrCodeDataSchema;
use crate::artifact::ObjectQr;
use crate::envelope::Envelope;
use crate::error::QrResult;
use crate::types::QrCodeType;

pub struct ExportObjectDataSchema;

impl QrCodeDataSchema for ExportObjectDataSchema {
    type Artifact = ObjectQr;

    fn get_data(qr: &ObjectQr) -> QrResult<Value> {
        Ok(qr.object().clone())
    }
}

impl ExportObjectDataSchema {
    pub fn parse(json: &str) -> QrResult<ObjectQr> {
        Ok(Self::from_envelope(Envelope::parse(json, QrCodeType::ExportObject)?))
    }

    pub(crate) fn from_envelope(envelope: Envelope) -> ObjectQr {
        ObjectQr::new(envelope.data, envelope.network_id, envelope.chain_id)
    }
}
