//! PostgreSQL implementation of UserRepository.
//!
//! A user row and its free subscription row are written in one transaction,
//! so no user ever exists without quota state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::subscription_repository::insert_subscription;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::subscription::Subscription;
use crate::domain::user::User;
use crate::ports::UserRepository;

/// PostgreSQL implementation of the UserRepository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_parts(
            UserId::from_uuid(row.id),
            Timestamp::from_datetime(row.created_at),
        )
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_with_subscription(
        &self,
        user: &User,
        subscription: &Subscription,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to start transaction: {}", e)))?;

        sqlx::query("INSERT INTO users (id, created_at) VALUES ($1, $2)")
            .bind(user.id.as_uuid())
            .bind(user.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert user: {}", e)))?;

        insert_subscription(&mut tx, subscription)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert subscription: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, created_at FROM users WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find user: {}", e)))?;

        Ok(row.map(User::from))
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to check user: {}", e)))
    }
}
