//! Password based protection of QR code payloads
//!
//! This module provides:
//! - `EncryptionService`: PBKDF2-HMAC-SHA1 key derivation + AES-256-CBC
//! - `EncryptedPayload`: the `{ciphertext, salt}` wire shape
//! - `ProtectedField`: a `data` field that is either plain or encrypted

pub mod encryption;
pub mod payload;
pub mod protected;

pub use encryption::{CipherParams, EncryptionService, KdfParams};
pub use payload::EncryptedPayload;
pub use protected::ProtectedField;
