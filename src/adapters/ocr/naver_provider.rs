//! Naver Clova OCR - Implementation of OcrProvider.
//!
//! Sends the image inline as base64 and joins the recognized fields of the
//! first image, one per line.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::config::OcrConfig;
use crate::ports::{OcrError, OcrImage, OcrProvider};

/// Configuration for the Naver OCR provider.
#[derive(Debug, Clone)]
pub struct NaverOcrConfig {
    secret_key: Secret<String>,
    /// Full invoke URL of the OCR domain.
    pub invoke_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl NaverOcrConfig {
    /// Creates a configuration with the default 30 second timeout.
    pub fn new(secret_key: impl Into<String>, invoke_url: impl Into<String>) -> Self {
        Self {
            secret_key: Secret::new(secret_key.into()),
            invoke_url: invoke_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builds the provider configuration from application settings.
    pub fn from_settings(settings: &OcrConfig) -> Result<Self, OcrError> {
        let secret = settings
            .naver_secret_key
            .as_deref()
            .ok_or_else(|| OcrError::Request("naver secret key is not configured".to_string()))?;
        let url = settings
            .naver_invoke_url
            .as_deref()
            .ok_or_else(|| OcrError::Request("naver invoke url is not configured".to_string()))?;

        Ok(Self::new(secret, url).with_timeout(settings.timeout()))
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Naver Clova OCR client.
pub struct NaverOcrProvider {
    config: NaverOcrConfig,
    client: Client,
}

impl NaverOcrProvider {
    /// Creates a new provider.
    pub fn new(config: NaverOcrConfig) -> Result<Self, OcrError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OcrError::Request(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn build_request(image: &OcrImage) -> NaverRequest {
        NaverRequest {
            images: vec![NaverImage {
                format: image.format.as_str().to_string(),
                name: "demo".to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(&image.bytes),
            }],
            request_id: Uuid::new_v4().to_string(),
            version: "V2".to_string(),
            timestamp: 0,
        }
    }

    /// Joins the non-empty `inferText` values of the first image.
    fn collect_text(response: NaverResponse) -> String {
        let lines: Vec<String> = response
            .images
            .into_iter()
            .next()
            .map(|image| image.fields)
            .unwrap_or_default()
            .into_iter()
            .map(|field| field.infer_text)
            .filter(|text| !text.is_empty())
            .collect();

        lines.join("\n").trim().to_string()
    }
}

#[async_trait]
impl OcrProvider for NaverOcrProvider {
    async fn extract_text(&self, image: &OcrImage) -> Result<String, OcrError> {
        tracing::info!(bytes = image.len(), format = image.format.as_str(), "Calling Naver OCR");

        let response = self
            .client
            .post(&self.config.invoke_url)
            .header("X-OCR-SECRET", self.config.secret_key.expose_secret())
            .json(&Self::build_request(image))
            .send()
            .await
            .map_err(|e| OcrError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NaverResponse = response
            .json()
            .await
            .map_err(|e| OcrError::Parse(e.to_string()))?;

        let text = Self::collect_text(parsed);
        tracing::debug!(chars = text.chars().count(), "Naver OCR finished");
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "naver"
    }
}

// ----- Naver API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NaverRequest {
    images: Vec<NaverImage>,
    request_id: String,
    version: String,
    timestamp: i64,
}

#[derive(Debug, Serialize)]
struct NaverImage {
    format: String,
    name: String,
    data: String,
}

#[derive(Debug, Default, Deserialize)]
struct NaverResponse {
    #[serde(default)]
    images: Vec<NaverResponseImage>,
}

#[derive(Debug, Default, Deserialize)]
struct NaverResponseImage {
    #[serde(default)]
    fields: Vec<NaverField>,
}

#[derive(Debug, Deserialize)]
struct NaverField {
    #[serde(rename = "inferText", default)]
    infer_text: String,
}
