//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Anonymous users (created with their subscription)
//! - `SubscriptionRepository` - Plan and quota state
//! - `ProfileRepository` - Conversation-partner profiles
//! - `MessageHistoryRepository` - Generated suggestion log
//!
//! ## Provider Ports
//!
//! - `AIProvider` - LLM chat completions
//! - `OcrProvider` - Screenshot text extraction

mod ai_provider;
mod message_history_repository;
mod ocr_provider;
mod profile_repository;
mod subscription_repository;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ModelTier, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use message_history_repository::MessageHistoryRepository;
pub use ocr_provider::{ImageFormat, OcrError, OcrImage, OcrProvider};
pub use profile_repository::ProfileRepository;
pub use subscription_repository::SubscriptionRepository;
pub use user_repository::UserRepository;
