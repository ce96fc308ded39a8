//! Add contact schema: `data = {name, publicKey}`

use serde_json::{json, Value};

use super::QrCodeDataSchema;
use crate::artifact::ContactQr;
use crate::envelope::Envelope;
use crate::error::QrResult;
use crate::types::QrCodeType;
use crate::utils::require_json_string;

pub struct AddContactDataSchema;

impl QrCodeDataSchema for AddContactDataSchema {
    type Artifact = ContactQr;

    fn get_data(qr: &ContactQr) -> QrResult<Value> {
        Ok(json!({
            "name": qr.name(),
            "publicKey": qr.account_public_key(),
        }))
    }
}

impl AddContactDataSchema {
    pub fn parse(json: &str) -> QrResult<ContactQr> {
        Self::from_envelope(Envelope::parse(json, QrCodeType::AddContact)?)
    }

    pub(crate) fn from_envelope(envelope: Envelope) -> QrResult<ContactQr> {
        let name = require_json_string(&envelope.data, "name")?;
        let public_key = require_json_string(&envelope.data, "publicKey")?;
        Ok(ContactQr::new(name, public_key, envelope.network_id, envelope.chain_id))
    }
}
