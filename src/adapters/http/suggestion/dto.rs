//! Request/response DTOs for generation endpoints.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::adapters::http::billing::UsageResponse;
use crate::application::handlers::{GeneratedFromImage, GeneratedSuggestions};
use crate::domain::foundation::{ProfileId, Timestamp, ValidationError};
use crate::domain::suggestion::{MessageHistory, SuggestionContext};
use crate::ports::{ImageFormat, OcrImage};

/// Tone settings shared by both generation requests. Blank or missing
/// values fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextFields {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub num_suggestions: Option<i64>,
    #[serde(default)]
    pub profile_id: Option<String>,
}

impl ContextFields {
    pub fn context(&self) -> Result<SuggestionContext, ValidationError> {
        SuggestionContext::new(
            self.platform.clone(),
            self.relationship.clone(),
            self.style.clone(),
            self.tone.clone(),
            self.num_suggestions,
        )
    }

    pub fn profile_id(&self) -> Result<Option<ProfileId>, ValidationError> {
        self.profile_id.as_deref().map(ProfileId::parse).transpose()
    }
}

/// Request body for `POST /rizz/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub user_id: String,
    pub conversation: String,
    #[serde(flatten)]
    pub fields: ContextFields,
}

/// Request body for `POST /rizz/generate-image`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageRequest {
    pub user_id: String,
    /// Standard base64, optionally as a `data:` URL.
    pub image_base64: String,
    /// `jpeg`, `jpg`, `png` or `tiff`; sniffed from the bytes when absent.
    #[serde(default)]
    pub image_format: Option<String>,
    #[serde(flatten)]
    pub fields: ContextFields,
}

impl GenerateImageRequest {
    /// Decodes and checks the uploaded image.
    pub fn image(&self, max_bytes: usize) -> Result<OcrImage, ValidationError> {
        let encoded = match self.image_base64.split_once("base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            _ => self.image_base64.as_str(),
        };
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| ValidationError::invalid_format("image_base64", "not valid base64"))?;
        let declared = self
            .image_format
            .as_deref()
            .map(str::parse::<ImageFormat>)
            .transpose()?;
        OcrImage::new(bytes, declared, max_bytes)
    }
}

/// Response for `POST /rizz/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub suggestions: Vec<String>,
    pub usage: UsageResponse,
}

impl From<GeneratedSuggestions> for GenerateResponse {
    fn from(result: GeneratedSuggestions) -> Self {
        Self {
            suggestions: result.suggestions,
            usage: result.usage.into(),
        }
    }
}

/// Response for `POST /rizz/generate-image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub extracted_text: String,
    pub suggestions: Vec<String>,
    pub usage: UsageResponse,
}

impl From<GeneratedFromImage> for GenerateImageResponse {
    fn from(result: GeneratedFromImage) -> Self {
        Self {
            extracted_text: result.extracted_text,
            suggestions: result.suggestions,
            usage: result.usage.into(),
        }
    }
}

/// Query string for `GET /rizz/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryParams {
    pub user_id: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    pub id: String,
    pub conversation: String,
    pub suggestions: Vec<String>,
    pub created_at: Timestamp,
}

impl From<MessageHistory> for HistoryEntryResponse {
    fn from(entry: MessageHistory) -> Self {
        Self {
            id: entry.id.to_string(),
            conversation: entry.conversation,
            suggestions: entry.suggestions,
            created_at: entry.created_at,
        }
    }
}

/// Response for `GET /rizz/history`, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntryResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn image_request(image_base64: String, image_format: Option<&str>) -> GenerateImageRequest {
        GenerateImageRequest {
            user_id: "u".to_string(),
            image_base64,
            image_format: image_format.map(str::to_string),
            fields: ContextFields::default(),
        }
    }

    #[test]
    fn generate_request_reads_flattened_settings() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"user_id":"u","conversation":"hi","mode":"conversation","tone":"funny","num_suggestions":5}"#,
        )
        .unwrap();

        let context = req.fields.context().unwrap();

        assert_eq!(context.tone, "funny");
        assert_eq!(context.platform, "kakao");
        assert_eq!(context.num_suggestions, 5);
    }

    #[test]
    fn malformed_profile_id_is_rejected() {
        let fields = ContextFields {
            profile_id: Some("not-a-uuid".to_string()),
            ..ContextFields::default()
        };

        assert!(fields.profile_id().is_err());
    }

    #[test]
    fn image_is_sniffed_when_format_is_absent() {
        let req = image_request(STANDARD.encode(PNG_HEADER), None);

        let image = req.image(1024).unwrap();

        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(image.len(), PNG_HEADER.len());
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        let encoded = format!("data:image/png;base64,{}", STANDARD.encode(PNG_HEADER));

        let image = image_request(encoded, Some("png")).image(1024).unwrap();

        assert_eq!(image.bytes, PNG_HEADER.to_vec());
    }

    #[test]
    fn invalid_base64_is_a_validation_error() {
        let err = image_request("%%%".to_string(), None).image(1024).unwrap_err();

        assert_eq!(err.field(), "image_base64");
    }

    #[test]
    fn oversized_image_is_rejected() {
        let req = image_request(STANDARD.encode([0u8; 64]), Some("jpeg"));

        assert!(req.image(16).is_err());
    }
}
