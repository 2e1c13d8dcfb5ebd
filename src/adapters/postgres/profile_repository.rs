//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of the ProfileRepository port.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    /// Creates a new PostgresProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    age: Option<i32>,
    gender: Option<String>,
    memo: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: ProfileId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            name: row.name,
            age: row.age,
            gender: row.gender,
            memo: row.memo,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

fn profile_not_found() -> DomainError {
    DomainError::new(ErrorCode::ProfileNotFound, "Profile not found")
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                id, user_id, name, age, gender, memo, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(profile.user_id.as_uuid())
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(&profile.memo)
        .bind(profile.created_at.as_datetime())
        .bind(profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return DomainError::new(ErrorCode::UserNotFound, "User not found");
                }
            }
            DomainError::database(format!("Failed to save profile: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                name = $2,
                age = $3,
                gender = $4,
                memo = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(&profile.memo)
        .bind(profile.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, age, gender, memo, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find profile: {}", e)))?;

        Ok(row.map(Profile::from))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Profile>, DomainError> {
        let rows: Vec<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, age, gender, memo, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list profiles: {}", e)))?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn delete(&self, id: &ProfileId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found());
        }

        Ok(())
    }
}
