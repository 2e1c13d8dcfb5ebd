//! Subscription repository port.
//!
//! # Design
//!
//! - **One per user**: `user_id` is the key; implementations enforce uniqueness
//! - **Column-scoped writes**: the usage gate writes only the counter columns
//!   and activation writes only the plan columns, so neither can revert the
//!   other when both run for the same user
//! - **Guarded lapse**: a lapse applies only while the stored term still ends
//!   at the instant that was observed as expired
//! - **No version column**: two gate calls for the same user may still read
//!   the same counter

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::subscription::Subscription;

/// Repository port for Subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Save a new subscription.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the user already has a subscription
    /// - `DatabaseError` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Store `daily_usage_count`, `last_reset_date` and `updated_at`.
    ///
    /// Plan columns are left as they are in the store.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if no row exists for the user
    /// - `DatabaseError` on persistence failure
    async fn update_usage(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Store `is_premium`, `plan_type`, `expires_at` and `updated_at`.
    ///
    /// Usage columns are left as they are in the store.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if no row exists for the user
    /// - `DatabaseError` on persistence failure
    async fn update_plan(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Downgrade a premium record whose term ended at `expired_at`.
    ///
    /// Returns `false` without writing when the stored record is no longer
    /// premium with that exact expiry, e.g. after a concurrent activation.
    async fn record_lapse(
        &self,
        user_id: &UserId,
        expired_at: Timestamp,
        now: Timestamp,
    ) -> Result<bool, DomainError>;

    /// Find the subscription owned by a user.
    ///
    /// Returns `None` if the user has none.
    async fn find_by_user_id(&self, user_id: &UserId)
        -> Result<Option<Subscription>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SubscriptionRepository) {}
    }
}
