//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Users, created together with their subscription
//! - `PostgresSubscriptionRepository` - Plan and daily quota state
//! - `PostgresProfileRepository` - Conversation-partner profiles
//! - `PostgresMessageHistoryRepository` - Generated suggestion log

mod message_history_repository;
mod profile_repository;
mod subscription_repository;
mod user_repository;

pub use message_history_repository::PostgresMessageHistoryRepository;
pub use profile_repository::PostgresProfileRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
pub use user_repository::PostgresUserRepository;
