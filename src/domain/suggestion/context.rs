//! Validated generation inputs.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

pub const DEFAULT_SUGGESTIONS: usize = 3;
pub const MAX_SUGGESTIONS: usize = 10;
pub const CONVERSATION_MAX_CHARS: usize = 10_000;

/// Minimum trimmed length of OCR output before it is worth sending to the model.
pub const MIN_EXTRACTED_CHARS: usize = 5;

/// Chat transcript the suggestions should answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation(String);

impl Conversation {
    /// Pasted text: must be non-blank and within `CONVERSATION_MAX_CHARS`.
    pub fn from_text(raw: &str) -> Result<Self, ValidationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("conversation"));
        }
        let len = text.chars().count();
        if len > CONVERSATION_MAX_CHARS {
            return Err(ValidationError::too_long("conversation", CONVERSATION_MAX_CHARS, len));
        }
        Ok(Self(text.to_string()))
    }

    /// OCR output: needs at least `MIN_EXTRACTED_CHARS` characters after trimming.
    pub fn from_extracted(raw: &str) -> Result<Self, DomainError> {
        let text = raw.trim();
        if text.chars().count() < MIN_EXTRACTED_CHARS {
            return Err(DomainError::new(
                ErrorCode::NoUsableText,
                "Could not read enough text from the image. Try a clearer screenshot.",
            )
            .with_detail("extracted_chars", text.chars().count().to_string()));
        }
        Self::from_text(text).map_err(DomainError::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Tone settings for a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionContext {
    /// Messenger the reply will be sent on, e.g. `kakao`, `instagram`.
    pub platform: String,
    /// Relationship stage, e.g. `first_meet`, `some`, `couple`.
    pub relationship: String,
    /// Speech level, e.g. `banmal`, `honorific`.
    pub style: String,
    /// Mood, e.g. `friendly`, `funny`, `serious`.
    pub tone: String,
    pub num_suggestions: usize,
}

impl Default for SuggestionContext {
    fn default() -> Self {
        Self {
            platform: "kakao".to_string(),
            relationship: "first_meet".to_string(),
            style: "banmal".to_string(),
            tone: "friendly".to_string(),
            num_suggestions: DEFAULT_SUGGESTIONS,
        }
    }
}

impl SuggestionContext {
    /// Builds a context, falling back to defaults for blank settings.
    pub fn new(
        platform: Option<String>,
        relationship: Option<String>,
        style: Option<String>,
        tone: Option<String>,
        num_suggestions: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let defaults = Self::default();
        let num_suggestions = match num_suggestions {
            None => defaults.num_suggestions,
            Some(n) if (1..=MAX_SUGGESTIONS as i64).contains(&n) => n as usize,
            Some(n) => {
                return Err(ValidationError::out_of_range(
                    "num_suggestions",
                    1,
                    MAX_SUGGESTIONS as i32,
                    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                ))
            }
        };

        Ok(Self {
            platform: non_blank_or(platform, defaults.platform),
            relationship: non_blank_or(relationship, defaults.relationship),
            style: non_blank_or(style, defaults.style),
            tone: non_blank_or(tone, defaults.tone),
            num_suggestions,
        })
    }
}

fn non_blank_or(value: Option<String>, default: String) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default,
    }
}
