//! QR code generator
//!
//! Typed constructors for every artifact, plus [`QrCodeGenerator::from_json`],
//! the single decode entry point that reads the `type` discriminant and
//! hands the envelope to the matching schema.

use serde_json::Value;
use std::sync::Arc;

use crate::artifact::{
    AccountQr, AddressQr, ContactQr, CosignatureQr, CosignatureSignedTransactionQr, MnemonicQr, ObjectQr,
    QrCode, SignedTransactionQr, TransactionQr,
};
use crate::envelope::Envelope;
use crate::error::{QrError, QrResult};
use crate::log_debug;
use crate::schema::{
    AddContactDataSchema, CosignatureSignedTransactionDataSchema, ExportAccountDataSchema,
    ExportAddressDataSchema, ExportMnemonicDataSchema, ExportObjectDataSchema, RequestCosignatureDataSchema,
    RequestTransactionDataSchema, SignedTransactionDataSchema,
};
use crate::sdk::{SignedTransaction, SignedTransactionMapper, Transaction, TransactionFactory};
use crate::types::{NetworkType, QrCodeType};
use crate::utils::{as_integral_u64, is_truthy, parse_json_value};

// =============================================================================
// Parse Options
// =============================================================================

/// Password and SDK collaborators available to [`QrCodeGenerator::from_json`].
///
/// Only the pieces needed by the scanned type are consulted; a missing
/// collaborator is an error only when the envelope requires it.
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    pub password: Option<&'a str>,
    pub transaction_factory: Option<&'a dyn TransactionFactory>,
    pub signed_transaction_mapper: Option<&'a dyn SignedTransactionMapper>,
    pub cosignature_signed_mapper: Option<&'a dyn SignedTransactionMapper>,
}

impl<'a> ParseOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_password(mut self, password: &'a str) -> Self {
        self.password = Some(password);
        self
    }

    pub fn with_transaction_factory(mut self, factory: &'a dyn TransactionFactory) -> Self {
        self.transaction_factory = Some(factory);
        self
    }

    pub fn with_signed_transaction_mapper(mut self, mapper: &'a dyn SignedTransactionMapper) -> Self {
        self.signed_transaction_mapper = Some(mapper);
        self
    }

    pub fn with_cosignature_signed_mapper(mut self, mapper: &'a dyn SignedTransactionMapper) -> Self {
        self.cosignature_signed_mapper = Some(mapper);
        self
    }

    fn require_factory(&self) -> QrResult<&'a dyn TransactionFactory> {
        self.transaction_factory
            .ok_or(QrError::MissingCollaborator("transaction factory"))
    }

    fn require_signed_mapper(&self) -> QrResult<&'a dyn SignedTransactionMapper> {
        self.signed_transaction_mapper
            .ok_or(QrError::MissingCollaborator("signed transaction mapper"))
    }

    fn require_cosignature_signed_mapper(&self) -> QrResult<&'a dyn SignedTransactionMapper> {
        self.cosignature_signed_mapper
            .ok_or(QrError::MissingCollaborator("cosignature signed transaction mapper"))
    }
}

// =============================================================================
// Generator
// =============================================================================

pub struct QrCodeGenerator;

impl QrCodeGenerator {
    pub fn create_add_contact(
        name: impl Into<String>,
        account_public_key: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> ContactQr {
        ContactQr::new(name, account_public_key, network_type, generation_hash)
    }

    pub fn create_export_address(
        name: impl Into<String>,
        account_address: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> AddressQr {
        AddressQr::new(name, account_address, network_type, generation_hash)
    }

    pub fn create_export_object(
        object: Value,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> ObjectQr {
        ObjectQr::new(object, network_type, generation_hash)
    }

    pub fn create_export_account(
        account_private_key: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
        password: Option<&str>,
    ) -> AccountQr {
        AccountQr::new(account_private_key, network_type, generation_hash, password)
    }

    pub fn create_export_mnemonic(
        mnemonic_plain_text: impl Into<String>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
        password: Option<&str>,
    ) -> MnemonicQr {
        MnemonicQr::new(mnemonic_plain_text, network_type, generation_hash, password)
    }

    pub fn create_transaction_request(
        transaction: Arc<dyn Transaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> TransactionQr {
        TransactionQr::new(transaction, network_type, generation_hash)
    }

    pub fn create_cosignature_request(
        transaction: Arc<dyn Transaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> CosignatureQr {
        CosignatureQr::new(transaction, network_type, generation_hash)
    }

    pub fn create_signed_transaction(
        signed_transaction: Arc<dyn SignedTransaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> SignedTransactionQr {
        SignedTransactionQr::new(signed_transaction, network_type, generation_hash)
    }

    pub fn create_cosignature_signed_transaction(
        signed_transaction: Arc<dyn SignedTransaction>,
        network_type: NetworkType,
        generation_hash: impl Into<String>,
    ) -> CosignatureSignedTransactionQr {
        CosignatureSignedTransactionQr::new(signed_transaction, network_type, generation_hash)
    }

    /// Decode any QR code JSON into its artifact.
    ///
    /// A missing password for account and mnemonic exports is not checked
    /// here; those schemas report it as their generic parse failure.
    pub fn from_json(json: &str, options: &ParseOptions<'_>) -> QrResult<QrCode> {
        let value = parse_json_value(json)?;
        let qr_type = read_type(&value)?;

        log_debug!("generator", "Dispatching QR code", qr_type = qr_type);

        let code: QrCode = match qr_type {
            QrCodeType::AddContact => {
                AddContactDataSchema::from_envelope(Envelope::from_value(value, qr_type)?)?.into()
            }
            QrCodeType::ExportAccount => {
                ExportAccountDataSchema::from_envelope(Envelope::from_value(value, qr_type)?, options.password)?
                    .into()
            }
            QrCodeType::RequestTransaction => {
                let factory = options.require_factory()?;
                RequestTransactionDataSchema::from_envelope(Envelope::from_value(value, qr_type)?, factory)?.into()
            }
            QrCodeType::RequestCosignature => {
                let factory = options.require_factory()?;
                RequestCosignatureDataSchema::from_envelope(Envelope::from_value(value, qr_type)?, factory)?.into()
            }
            QrCodeType::ExportMnemonic => {
                ExportMnemonicDataSchema::from_envelope(Envelope::from_value(value, qr_type)?, options.password)?
                    .into()
            }
            QrCodeType::ExportObject => {
                ExportObjectDataSchema::from_envelope(Envelope::from_value(value, qr_type)?).into()
            }
            QrCodeType::ExportAddress => {
                ExportAddressDataSchema::from_envelope(Envelope::from_value(value, qr_type)?)?.into()
            }
            QrCodeType::SignedTransaction => {
                let mapper = options.require_signed_mapper()?;
                SignedTransactionDataSchema::from_envelope(Envelope::from_value(value, qr_type)?, mapper)?.into()
            }
            QrCodeType::CosignatureSignedTransaction => {
                let mapper = options.require_cosignature_signed_mapper()?;
                CosignatureSignedTransactionDataSchema::from_envelope(Envelope::from_value(value, qr_type)?, mapper)?
                    .into()
            }
        };

        Ok(code)
    }
}

/// Read the `type` discriminant of a parsed envelope
fn read_type(value: &Value) -> QrResult<QrCodeType> {
    let raw = match value.get("type") {
        Some(t) if is_truthy(t) => t,
        _ => return Err(QrError::MissingField("type")),
    };

    match raw {
        Value::Number(n) => match as_integral_u64(raw) {
            Some(t) => QrCodeType::try_from(t),
            None => Err(QrError::UnrecognizedType(n.to_string())),
        },
        Value::String(s) => Err(QrError::UnrecognizedType(s.clone())),
        other => Err(QrError::UnrecognizedType(other.to_string())),
    }
}
