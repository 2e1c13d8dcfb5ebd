//! GenerateFromImageHandler - reply generation from a chat screenshot.
//!
//! Runs OCR first, then hands the extracted transcript to
//! [`GenerateSuggestionsHandler`]. OCR happens before the usage gate, so a
//! screenshot with no readable text costs nothing.

use std::sync::Arc;

use super::{GenerateSuggestionsCommand, GenerateSuggestionsHandler, GeneratedSuggestions};
use crate::domain::foundation::{DomainError, ProfileId, UserId};
use crate::domain::subscription::UsageSummary;
use crate::domain::suggestion::{Conversation, SuggestionContext};
use crate::ports::{OcrImage, OcrProvider};

/// Command to generate replies from a screenshot.
#[derive(Debug, Clone)]
pub struct GenerateFromImageCommand {
    pub user_id: UserId,
    pub image: OcrImage,
    pub context: SuggestionContext,
    pub profile_id: Option<ProfileId>,
}

/// Generated replies plus the text read from the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFromImage {
    pub extracted_text: String,
    pub suggestions: Vec<String>,
    pub usage: UsageSummary,
}

/// Handler for screenshot-based generation.
pub struct GenerateFromImageHandler {
    ocr: Arc<dyn OcrProvider>,
    generator: Arc<GenerateSuggestionsHandler>,
}

impl GenerateFromImageHandler {
    pub fn new(ocr: Arc<dyn OcrProvider>, generator: Arc<GenerateSuggestionsHandler>) -> Self {
        Self { ocr, generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateFromImageCommand,
    ) -> Result<GeneratedFromImage, DomainError> {
        let extracted = self.ocr.extract_text(&cmd.image).await.map_err(|e| {
            tracing::error!(
                user_id = %cmd.user_id,
                provider = self.ocr.name(),
                bytes = cmd.image.len(),
                error = %e,
                "OCR failed"
            );
            DomainError::from(e)
        })?;

        let conversation = Conversation::from_extracted(&extracted)?;
        let extracted_text = conversation.as_str().to_string();

        tracing::debug!(
            user_id = %cmd.user_id,
            chars = extracted_text.chars().count(),
            "Screenshot text extracted"
        );

        let GeneratedSuggestions { suggestions, usage } = self
            .generator
            .handle(GenerateSuggestionsCommand {
                user_id: cmd.user_id,
                conversation,
                context: cmd.context,
                profile_id: cmd.profile_id,
            })
            .await?;

        Ok(GeneratedFromImage {
            extracted_text,
            suggestions,
            usage,
        })
    }
}
