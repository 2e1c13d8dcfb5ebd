//! Generated exchange history.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HistoryEntryId, Timestamp, UserId};

/// One conversation the user asked about, with the suggestions returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHistory {
    pub id: HistoryEntryId,
    pub user_id: UserId,
    pub conversation: String,
    pub suggestions: Vec<String>,
    pub created_at: Timestamp,
}

impl MessageHistory {
    pub fn record(
        user_id: UserId,
        conversation: impl Into<String>,
        suggestions: Vec<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: HistoryEntryId::new(),
            user_id,
            conversation: conversation.into(),
            suggestions,
            created_at: now,
        }
    }
}
