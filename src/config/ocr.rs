//! OCR provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_IMAGE_LIMIT: usize = 50 * 1024 * 1024;

/// OCR provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Which OCR backend to construct at startup
    #[serde(default)]
    pub provider: OcrProviderKind,

    /// Naver Clova OCR secret (sent as `X-OCR-SECRET`)
    pub naver_secret_key: Option<String>,

    /// Naver Clova OCR general endpoint
    pub naver_invoke_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Largest decoded image accepted, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Text returned by the mock provider
    pub mock_text: Option<String>,
}

/// OCR backend selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OcrProviderKind {
    #[default]
    Naver,
    Mock,
}

impl OcrConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate OCR configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == OcrProviderKind::Naver {
            if self
                .naver_secret_key
                .as_ref()
                .map_or(true, |k| k.trim().is_empty())
            {
                return Err(ValidationError::MissingRequired("SYRANO__OCR__NAVER_SECRET_KEY"));
            }
            match self.naver_invoke_url.as_deref() {
                None | Some("") => {
                    return Err(ValidationError::MissingRequired("SYRANO__OCR__NAVER_INVOKE_URL"))
                }
                Some(url) if !url.starts_with("https://") && !url.starts_with("http://") => {
                    return Err(ValidationError::InvalidOcrUrl)
                }
                Some(_) => {}
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_image_bytes == 0 || self.max_image_bytes > MAX_IMAGE_LIMIT {
            return Err(ValidationError::InvalidImageLimit);
        }
        Ok(())
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            provider: OcrProviderKind::default(),
            naver_secret_key: None,
            naver_invoke_url: None,
            timeout_secs: default_timeout(),
            max_image_bytes: default_max_image_bytes(),
            mock_text: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_image_bytes() -> usize {
    10 * 1024 * 1024
}
