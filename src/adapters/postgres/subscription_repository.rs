//! PostgreSQL implementation of SubscriptionRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::subscription::{PlanType, Subscription};
use crate::ports::SubscriptionRepository;

/// PostgreSQL implementation of the SubscriptionRepository port.
#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    user_id: Uuid,
    is_premium: bool,
    plan_type: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    daily_usage_count: i32,
    last_reset_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let plan_type = row
            .plan_type
            .as_deref()
            .map(parse_plan_type)
            .transpose()?;

        Ok(Subscription {
            user_id: UserId::from_uuid(row.user_id),
            is_premium: row.is_premium,
            plan_type,
            expires_at: row.expires_at.map(Timestamp::from_datetime),
            daily_usage_count: row.daily_usage_count,
            last_reset_date: row.last_reset_date,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_plan_type(s: &str) -> Result<PlanType, DomainError> {
    s.parse::<PlanType>()
        .map_err(|_| DomainError::database(format!("Invalid plan_type value: {}", s)))
}

/// Inserts a subscription row on an existing connection or transaction.
pub(super) async fn insert_subscription(
    conn: &mut PgConnection,
    subscription: &Subscription,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO subscriptions (
            user_id, is_premium, plan_type, expires_at, daily_usage_count,
            last_reset_date, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(subscription.user_id.as_uuid())
    .bind(subscription.is_premium)
    .bind(subscription.plan_type.map(|p| p.as_str()))
    .bind(subscription.expires_at.map(|t| *t.as_datetime()))
    .bind(subscription.daily_usage_count)
    .bind(subscription.last_reset_date)
    .bind(subscription.created_at.as_datetime())
    .bind(subscription.updated_at.as_datetime())
    .execute(conn)
    .await?;

    Ok(())
}

fn require_row(rows_affected: u64) -> Result<(), DomainError> {
    if rows_affected == 0 {
        return Err(DomainError::new(
            ErrorCode::SubscriptionNotFound,
            "Subscription not found",
        ));
    }
    Ok(())
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database(format!("Failed to acquire connection: {}", e)))?;

        insert_subscription(&mut conn, subscription)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return DomainError::new(ErrorCode::UserNotFound, "User not found");
                    }
                }
                DomainError::database(format!("Failed to save subscription: {}", e))
            })
    }

    async fn update_usage(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                daily_usage_count = $2,
                last_reset_date = $3,
                updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(subscription.user_id.as_uuid())
        .bind(subscription.daily_usage_count)
        .bind(subscription.last_reset_date)
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update usage: {}", e)))?;

        require_row(result.rows_affected())
    }

    async fn update_plan(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                is_premium = $2,
                plan_type = $3,
                expires_at = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(subscription.user_id.as_uuid())
        .bind(subscription.is_premium)
        .bind(subscription.plan_type.map(|p| p.as_str()))
        .bind(subscription.expires_at.map(|t| *t.as_datetime()))
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update plan: {}", e)))?;

        require_row(result.rows_affected())
    }

    async fn record_lapse(
        &self,
        user_id: &UserId,
        expired_at: Timestamp,
        now: Timestamp,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                is_premium = FALSE,
                plan_type = NULL,
                expires_at = NULL,
                updated_at = $3
            WHERE user_id = $1 AND is_premium AND expires_at = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(expired_at.as_datetime())
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to record lapse: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT user_id, is_premium, plan_type, expires_at, daily_usage_count,
                   last_reset_date, created_at, updated_at
            FROM subscriptions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find subscription: {}", e)))?;

        row.map(Subscription::try_from).transpose()
    }
}
