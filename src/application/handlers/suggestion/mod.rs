//! Suggestion handlers.
//!
//! ## Commands
//! - Generating replies from pasted text
//! - Generating replies from a screenshot (OCR first)
//!
//! ## Queries
//! - Recent generation history

mod generate_from_image;
mod generate_suggestions;
mod list_history;

// Commands
pub use generate_from_image::{
    GenerateFromImageCommand, GenerateFromImageHandler, GeneratedFromImage,
};
pub use generate_suggestions::{
    GenerateSuggestionsCommand, GenerateSuggestionsHandler, GeneratedSuggestions,
    GenerationSettings,
};

// Queries
pub use list_history::{ListHistoryHandler, ListHistoryQuery, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
