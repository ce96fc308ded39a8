//! QR Code Rendering Types
//!
//! Settings and output formats handed to the renderer.

use serde::{Deserialize, Serialize};

use super::ErrorCorrectionLevel;

/// Output produced by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `data:image/png;base64,...` URL
    DataUrl,
    /// Text rendering, two characters per module
    Ascii,
    /// SVG document
    Svg,
}

impl OutputFormat {
    /// Get MIME-like string for the output format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::DataUrl => "image/png",
            OutputFormat::Ascii => "text/plain",
            OutputFormat::Svg => "image/svg+xml",
        }
    }
}

/// QR code generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrCodeSettings {
    /// Error correction level
    pub correction_level: ErrorCorrectionLevel,
    /// Rendered width in pixels
    pub width: u32,
    /// Pixels per QR module
    pub cell_size: u32,
    /// Quiet zone in pixels
    pub margin: u32,
}

impl QrCodeSettings {
    pub const DEFAULT_WIDTH: u32 = 250;
    pub const DEFAULT_CELL_SIZE: u32 = 1;
    pub const DEFAULT_MARGIN: u32 = 2;

    pub fn with_correction_level(mut self, level: ErrorCorrectionLevel) -> Self {
        self.correction_level = level;
        self
    }
}

impl Default for QrCodeSettings {
    fn default() -> Self {
        Self {
            correction_level: ErrorCorrectionLevel::M,
            width: Self::DEFAULT_WIDTH,
            cell_size: Self::DEFAULT_CELL_SIZE,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = QrCodeSettings::default();

        assert_eq!(settings.correction_level, ErrorCorrectionLevel::M);
        assert_eq!(settings.width, 250);
        assert_eq!(settings.cell_size, 1);
        assert_eq!(settings.margin, 2);
    }

    #[test]
    fn test_settings_partial_deserialization() {
        let settings: QrCodeSettings = serde_json::from_str(r#"{"correction_level":"H"}"#).unwrap();

        assert_eq!(settings.correction_level, ErrorCorrectionLevel::H);
        assert_eq!(settings.width, 250);
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::Svg.as_str(), "image/svg+xml");
        assert_eq!(OutputFormat::DataUrl.as_str(), "image/png");
    }
}
