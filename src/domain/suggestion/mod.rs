//! Reply suggestion generation domain.
//!
//! # Module Structure
//!
//! - `context` - validated request inputs (conversation, tone settings)
//! - `prompt` - system and user prompt construction
//! - `parse` - splitting model output into suggestions
//! - `history` - record of each generated exchange

mod context;
mod history;
mod parse;
mod prompt;

pub use context::{
    Conversation, SuggestionContext, CONVERSATION_MAX_CHARS, DEFAULT_SUGGESTIONS,
    MAX_SUGGESTIONS, MIN_EXTRACTED_CHARS,
};
pub use history::MessageHistory;
pub use parse::parse_suggestions;
pub use prompt::{build_system_prompt, build_user_prompt};
