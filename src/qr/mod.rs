//! QR Code Rendering Seam
//!
//! Matrix generation and image encoding are left to an external renderer.
//! This module fixes what is handed over: the finished envelope JSON, the
//! requested output format and the [`QrCodeSettings`].
//!
//! # Usage
//! ```rust,ignore
//! use nip7_qrcode::{qr::{OutputFormat, QrCodeSettings}, QrCodeBase, QrCodeGenerator};
//!
//! let contact = QrCodeGenerator::create_add_contact("alice", public_key, network, hash);
//! let data_url = contact.to_base64(&my_renderer, &QrCodeSettings::default())?;
//! ```

pub mod types;

pub use types::*;

use serde::{Deserialize, Serialize};

use crate::error::{QrError, QrResult};

/// Maximum bytes for a single QR code at error correction level L
pub const MAX_QR_BYTES_L: usize = 2953;
/// Maximum bytes for a single QR code at error correction level M
pub const MAX_QR_BYTES_M: usize = 2331;
/// Maximum bytes for a single QR code at error correction level Q
pub const MAX_QR_BYTES_Q: usize = 1663;
/// Maximum bytes for a single QR code at error correction level H
pub const MAX_QR_BYTES_H: usize = 1273;

/// QR code error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    /// Low (~7% recovery)
    L,
    /// Medium (~15% recovery)
    #[default]
    M,
    /// Quartile (~25% recovery)
    Q,
    /// High (~30% recovery)
    H,
}

impl ErrorCorrectionLevel {
    /// Maximum bytes for this error correction level
    pub fn max_bytes(&self) -> usize {
        match self {
            ErrorCorrectionLevel::L => MAX_QR_BYTES_L,
            ErrorCorrectionLevel::M => MAX_QR_BYTES_M,
            ErrorCorrectionLevel::Q => MAX_QR_BYTES_Q,
            ErrorCorrectionLevel::H => MAX_QR_BYTES_H,
        }
    }

    /// Fail when `json` would not fit a single QR code at this level
    pub fn check_capacity(&self, json: &str) -> QrResult<()> {
        if json.len() > self.max_bytes() {
            return Err(QrError::PayloadTooLarge(json.len(), self.max_bytes()));
        }
        Ok(())
    }
}

/// External QR code renderer
pub trait QrRenderer {
    /// Render `json` in the requested format.
    ///
    /// `type_number` is the artifact's QR symbol version hint.
    fn render(
        &self,
        json: &str,
        type_number: u8,
        format: OutputFormat,
        settings: &QrCodeSettings,
    ) -> QrResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_correction_max_bytes() {
        assert_eq!(ErrorCorrectionLevel::L.max_bytes(), 2953);
        assert_eq!(ErrorCorrectionLevel::M.max_bytes(), 2331);
        assert_eq!(ErrorCorrectionLevel::Q.max_bytes(), 1663);
        assert_eq!(ErrorCorrectionLevel::H.max_bytes(), 1273);
    }

    #[test]
    fn test_default_level_is_medium() {
        assert_eq!(ErrorCorrectionLevel::default(), ErrorCorrectionLevel::M);
    }

    #[test]
    fn test_check_capacity() {
        let small = "x".repeat(1273);
        let large = "x".repeat(1274);

        assert!(ErrorCorrectionLevel::H.check_capacity(&small).is_ok());
        assert!(matches!(
            ErrorCorrectionLevel::H.check_capacity(&large),
            Err(QrError::PayloadTooLarge(1274, 1273))
        ));
        assert!(ErrorCorrectionLevel::L.check_capacity(&large).is_ok());
    }
}
