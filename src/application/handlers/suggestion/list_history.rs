//! ListHistoryHandler - Query handler for recent generations.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::suggestion::MessageHistory;
use crate::ports::MessageHistoryRepository;

/// Entries returned when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Largest page a caller may ask for.
pub const MAX_HISTORY_LIMIT: u32 = 100;

/// Query for a user's most recent generations.
#[derive(Debug, Clone)]
pub struct ListHistoryQuery {
    pub user_id: UserId,
    pub limit: Option<i64>,
}

/// Handler for listing history, newest first.
pub struct ListHistoryHandler {
    history: Arc<dyn MessageHistoryRepository>,
}

impl ListHistoryHandler {
    pub fn new(history: Arc<dyn MessageHistoryRepository>) -> Self {
        Self { history }
    }

    pub async fn handle(&self, query: ListHistoryQuery) -> Result<Vec<MessageHistory>, DomainError> {
        let limit = match query.limit {
            None => DEFAULT_HISTORY_LIMIT,
            Some(n) if (1..=i64::from(MAX_HISTORY_LIMIT)).contains(&n) => n as u32,
            Some(n) => {
                return Err(ValidationError::out_of_range(
                    "limit",
                    1,
                    MAX_HISTORY_LIMIT as i32,
                    n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
                )
                .into())
            }
        };

        self.history.list_recent(&query.user_id, limit).await
    }
}
