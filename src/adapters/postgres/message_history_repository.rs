//! PostgreSQL implementation of MessageHistoryRepository.
//!
//! Suggestions are stored as a JSONB array next to the source conversation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, HistoryEntryId, Timestamp, UserId};
use crate::domain::suggestion::MessageHistory;
use crate::ports::MessageHistoryRepository;

/// PostgreSQL implementation of the MessageHistoryRepository port.
#[derive(Clone)]
pub struct PostgresMessageHistoryRepository {
    pool: PgPool,
}

impl PostgresMessageHistoryRepository {
    /// Creates a new PostgresMessageHistoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MessageHistoryRow {
    id: Uuid,
    user_id: Uuid,
    conversation: String,
    suggestions: Json<Vec<String>>,
    created_at: DateTime<Utc>,
}

impl From<MessageHistoryRow> for MessageHistory {
    fn from(row: MessageHistoryRow) -> Self {
        MessageHistory {
            id: HistoryEntryId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            conversation: row.conversation,
            suggestions: row.suggestions.0,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl MessageHistoryRepository for PostgresMessageHistoryRepository {
    async fn append(&self, entry: &MessageHistory) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO message_history (id, user_id, conversation, suggestions, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.user_id.as_uuid())
        .bind(&entry.conversation)
        .bind(Json(&entry.suggestions))
        .bind(entry.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to append history: {}", e)))?;

        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<MessageHistory>, DomainError> {
        let rows: Vec<MessageHistoryRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, conversation, suggestions, created_at
            FROM message_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list history: {}", e)))?;

        Ok(rows.into_iter().map(MessageHistory::from).collect())
    }
}
