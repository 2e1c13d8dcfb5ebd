//! OCR Provider Port - Interface for extracting text from screenshots.
//!
//! Implementations are constructed once at startup and shared through the
//! application state; which one runs is a configuration choice.
//!
//! The port does not distinguish "no text found" from other failures. A
//! successful call may return an empty string, so callers validate the
//! length of the result themselves.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Port for text extraction from images.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Extracts all readable text, one detected block per line, trimmed.
    async fn extract_text(&self, image: &OcrImage) -> Result<String, OcrError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}

/// Image formats accepted for OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Tiff,
}

impl ImageFormat {
    /// Name used on the wire to OCR vendors.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Tiff => "tiff",
        }
    }

    /// Detects the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
            Some(ImageFormat::Tiff)
        } else {
            None
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "tif" | "tiff" => Ok(ImageFormat::Tiff),
            _ => Err(ValidationError::invalid_format(
                "image_format",
                "expected jpeg, png or tiff",
            )),
        }
    }
}

/// A decoded image ready for OCR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

impl OcrImage {
    /// Builds an image, sniffing the format when none is declared.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for zero bytes
    /// - `OutOfRange` when larger than `max_bytes`
    /// - `InvalidFormat` when the format is neither declared nor detectable
    pub fn new(
        bytes: Vec<u8>,
        declared: Option<ImageFormat>,
        max_bytes: usize,
    ) -> Result<Self, ValidationError> {
        if bytes.is_empty() {
            return Err(ValidationError::empty_field("image_base64"));
        }
        if bytes.len() > max_bytes {
            return Err(ValidationError::out_of_range(
                "image_bytes",
                1,
                i32::try_from(max_bytes).unwrap_or(i32::MAX),
                i32::try_from(bytes.len()).unwrap_or(i32::MAX),
            ));
        }
        let format = declared
            .or_else(|| ImageFormat::sniff(&bytes))
            .ok_or_else(|| {
                ValidationError::invalid_format("image_format", "could not detect image format")
            })?;
        Ok(Self { bytes, format })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// OCR provider errors.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    /// Transport failure talking to the provider.
    #[error("ocr request failed: {0}")]
    Request(String),

    /// Provider answered with a non-success status.
    #[error("ocr provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider response could not be decoded.
    #[error("ocr response could not be parsed: {0}")]
    Parse(String),
}

impl From<OcrError> for DomainError {
    fn from(err: OcrError) -> Self {
        DomainError::new(ErrorCode::OcrProviderError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn jpg_alias_maps_to_jpeg() {
        assert_eq!("jpg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("JPEG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::Jpeg.as_str(), "jpeg");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!("gif".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn sniffs_common_headers() {
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(&PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(b"II*\0rest"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::sniff(b"GIF89a"), None);
    }

    #[test]
    fn declared_format_wins_over_sniffing() {
        let image = OcrImage::new(PNG_HEADER.to_vec(), Some(ImageFormat::Jpeg), 1024).unwrap();
        assert_eq!(image.format, ImageFormat::Jpeg);
    }

    #[test]
    fn rejects_empty_and_oversized_images() {
        assert!(matches!(
            OcrImage::new(Vec::new(), Some(ImageFormat::Png), 1024),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(matches!(
            OcrImage::new(vec![0u8; 2048], Some(ImageFormat::Png), 1024),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_undetectable_format() {
        let err = OcrImage::new(b"GIF89a".to_vec(), None, 1024).unwrap_err();
        assert_eq!(err.field(), "image_format");
    }

    #[test]
    fn ocr_error_maps_to_upstream_code() {
        let err: DomainError = OcrError::Status { status: 500, body: "boom".into() }.into();
        assert_eq!(err.code, ErrorCode::OcrProviderError);
        assert!(err.code.is_upstream());
    }
}
