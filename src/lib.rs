//! NIP-7 QR Code Library
//!
//! Encode and decode the QR code payloads exchanged between wallets:
//! contacts, addresses, account and mnemonic exports, transaction and
//! cosignature requests, signed transactions and arbitrary objects.
//!
//! # Architecture
//!
//! This crate provides:
//! - **artifact**: One immutable value type per QR code kind, plus the `QrCode` sum type
//! - **schema**: The `data` layout of each kind, with its `parse` entry point
//! - **envelope**: The `{v, type, network_id, chain_id, data}` wire object
//! - **crypto**: Password encryption of account and mnemonic exports
//! - **generator**: Typed constructors and the polymorphic `from_json` decoder
//! - **qr**: The rendering seam (`QrRenderer`, correction levels, settings)
//! - **sdk**: Traits through which the blockchain SDK plugs in transaction codecs
//!
//! # Security
//!
//! Private keys, mnemonics and passwords held by artifacts are wrapped in
//! `zeroize::Zeroizing` and never printed by `Debug` or the logger.
//!
//! # Example
//!
//! ```rust,ignore
//! use nip7_qrcode::{NetworkType, ParseOptions, QrCodeBase, QrCodeGenerator};
//!
//! let qr = QrCodeGenerator::create_export_account(private_key, NetworkType::TEST_NET, hash, Some("password"));
//! let json = qr.to_json()?;
//!
//! let decoded = QrCodeGenerator::from_json(&json, &ParseOptions::new().with_password("password"))?;
//! assert_eq!(decoded.as_account().unwrap().account_private_key(), private_key);
//! ```

pub mod artifact;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod generator;
pub mod qr;
pub mod schema;
pub mod sdk;
pub mod types;
pub mod utils;

pub use artifact::{
    AccountQr, AddressQr, ContactQr, CosignatureQr, CosignatureSignedTransactionQr, MnemonicQr, ObjectQr, QrCode,
    QrCodeBase, SignedTransactionQr, TransactionQr,
};
pub use crypto::{EncryptedPayload, EncryptionService};
pub use envelope::Envelope;
pub use error::{ErrorKind, QrError, QrResult};
pub use generator::{ParseOptions, QrCodeGenerator};
pub use schema::QrCodeDataSchema;
pub use sdk::{SignedTransaction, SignedTransactionMapper, Transaction, TransactionFactory};
pub use types::{NetworkType, QrCodeType, QR_CODE_VERSION};
