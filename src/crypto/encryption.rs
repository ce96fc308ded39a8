//! Payload Encryption
//!
//! Symmetric encryption of one UTF-8 string under one password:
//! - PBKDF2-HMAC-SHA1 (2000 iterations) derives a 256-bit key from the password
//! - AES-256-CBC with PKCS7 padding encrypts the plaintext bytes
//! - A fresh 32-byte salt and 16-byte IV are drawn for every call
//!
//! The ciphertext is laid out as `hex(iv) || base64(aes_ciphertext)`, the salt
//! as `hex(salt)`. Parameters are fixed by the QR code wire format, which
//! favours small payloads over KDF hardness.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::Hmac;
use rand::{rngs::OsRng, RngCore};
use sha1::Sha1;
use zeroize::Zeroizing;

use super::payload::EncryptedPayload;
use crate::error::{QrError, QrResult};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Key derivation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KdfParams {
    /// PBKDF2 iterations
    pub iterations: u32,
    /// Derived key length in bytes
    pub key_len: usize,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: 2000,
            key_len: 32,
        }
    }
}

/// Random material sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CipherParams {
    /// Salt length in bytes
    pub salt_len: usize,
    /// IV length in bytes (AES block size)
    pub iv_len: usize,
}

impl CipherParams {
    /// Length of the hex encoded IV prefix of a ciphertext
    pub fn iv_hex_len(&self) -> usize {
        self.iv_len * 2
    }
}

impl Default for CipherParams {
    fn default() -> Self {
        Self {
            salt_len: 32,
            iv_len: 16,
        }
    }
}

/// Password based encryption of QR code secrets
#[derive(Debug, Clone, Copy, Default)]
pub struct EncryptionService {
    kdf: KdfParams,
    cipher: CipherParams,
}

impl EncryptionService {
    /// Service with the wire compatible parameters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kdf_params(&self) -> KdfParams {
        self.kdf
    }

    pub fn cipher_params(&self) -> CipherParams {
        self.cipher
    }

    /// Encrypt `data` with `password`
    pub fn encrypt(data: &str, password: &str) -> QrResult<EncryptedPayload> {
        Self::new().encrypt_with(data, password)
    }

    /// Decrypt a payload with `password`
    pub fn decrypt(payload: &EncryptedPayload, password: &str) -> QrResult<String> {
        Self::new().decrypt_with(payload, password)
    }

    /// Parse a `{ciphertext, salt}` JSON document and decrypt it
    pub fn decrypt_json(json: &str, password: &str) -> QrResult<String> {
        let payload = EncryptedPayload::from_json(json)?;
        Self::decrypt(&payload, password)
    }

    pub fn encrypt_with(&self, data: &str, password: &str) -> QrResult<EncryptedPayload> {
        let mut salt = vec![0u8; self.cipher.salt_len];
        OsRng.fill_bytes(&mut salt);

        let mut iv = vec![0u8; self.cipher.iv_len];
        OsRng.fill_bytes(&mut iv);

        let key = self.derive_key(password, &salt)?;

        let cipher = Aes256CbcEnc::new_from_slices(&key, &iv)
            .map_err(|_| QrError::Encryption("invalid key or IV length"))?;
        let encrypted = cipher.encrypt_padded_vec_mut::<Pkcs7>(data.as_bytes());

        let ciphertext = format!("{}{}", hex::encode(&iv), BASE64.encode(encrypted));
        Ok(EncryptedPayload::new(ciphertext, hex::encode(&salt)))
    }

    pub fn decrypt_with(&self, payload: &EncryptedPayload, password: &str) -> QrResult<String> {
        let salt = hex::decode(&payload.salt)?;

        let split = self.cipher.iv_hex_len();
        let (iv_hex, body) = match (payload.ciphertext.get(..split), payload.ciphertext.get(split..)) {
            (Some(iv), Some(body)) if !body.is_empty() => (iv, body),
            _ => return Err(QrError::Decryption("ciphertext too short")),
        };
        let iv = hex::decode(iv_hex)?;
        let encrypted = BASE64.decode(body)?;

        let key = self.derive_key(password, &salt)?;

        let cipher = Aes256CbcDec::new_from_slices(&key, &iv)
            .map_err(|_| QrError::Decryption("invalid key or IV length"))?;
        let decrypted = Zeroizing::new(
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(&encrypted)
                .map_err(|_| QrError::Decryption("incorrect password or corrupted data"))?,
        );

        std::str::from_utf8(&decrypted)
            .map(str::to_owned)
            .map_err(|_| QrError::Decryption("plaintext is not valid UTF-8"))
    }

    /// Derive the AES key from a password using PBKDF2-HMAC-SHA1
    fn derive_key(&self, password: &str, salt: &[u8]) -> QrResult<Zeroizing<Vec<u8>>> {
        let mut key = Zeroizing::new(vec![0u8; self.kdf.key_len]);
        pbkdf2::pbkdf2::<Hmac<Sha1>>(password.as_bytes(), salt, self.kdf.iterations, &mut key)
            .map_err(|_| QrError::Encryption("key derivation failed"))?;
        Ok(key)
    }
}
