//! Message history repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::suggestion::MessageHistory;

/// Append-only store of generated suggestions.
#[async_trait]
pub trait MessageHistoryRepository: Send + Sync {
    /// Record one generation.
    async fn append(&self, entry: &MessageHistory) -> Result<(), DomainError>;

    /// Most recent entries for a user, newest first, at most `limit`.
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<MessageHistory>, DomainError>;
}
