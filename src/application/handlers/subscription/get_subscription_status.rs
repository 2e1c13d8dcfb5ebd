//! GetSubscriptionStatusHandler - Query handler for plan and quota status.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{Subscription, SubscriptionError, UsageSummary};
use crate::ports::SubscriptionRepository;

use super::settle_expiry;

/// Query for a user's current subscription status.
#[derive(Debug, Clone)]
pub struct GetSubscriptionStatusQuery {
    pub user_id: UserId,
}

/// Subscription record together with today's quota snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionStatus {
    pub subscription: Subscription,
    pub usage: UsageSummary,
}

impl SubscriptionStatus {
    /// Snapshot of `subscription` for the UTC date of `now`.
    pub fn at(subscription: Subscription, now: Timestamp) -> Self {
        let usage = subscription.usage_on(now.utc_date());
        Self {
            subscription,
            usage,
        }
    }
}

/// Handler for reading subscription status without consuming quota.
pub struct GetSubscriptionStatusHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionStatusHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    /// Returns the status, persisting a lapse if the premium term ran out.
    pub async fn handle(
        &self,
        query: GetSubscriptionStatusQuery,
    ) -> Result<SubscriptionStatus, SubscriptionError> {
        let found = self
            .subscriptions
            .find_by_user_id(&query.user_id)
            .await?
            .ok_or(SubscriptionError::not_found_for_user(query.user_id))?;

        let now = Timestamp::now();
        let subscription = settle_expiry(self.subscriptions.as_ref(), found, now).await?;

        Ok(SubscriptionStatus::at(subscription, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::subscription::{PlanType, FREE_DAILY_LIMIT, UNLIMITED};
    use crate::domain::user::User;
    use crate::ports::UserRepository;

    async fn store_with(subscription_for: impl FnOnce(UserId) -> Subscription) -> (InMemoryStore, UserId) {
        let store = InMemoryStore::new();
        let user = User::new_anonymous(Timestamp::now());
        let subscription = subscription_for(user.id);
        store
            .create_with_subscription(&user, &subscription)
            .await
            .unwrap();
        (store, user.id)
    }

    #[tokio::test]
    async fn reports_free_usage_without_consuming() {
        let (store, user_id) = store_with(|id| {
            let mut sub = Subscription::new_free(id, Timestamp::now());
            sub.daily_usage_count = 2;
            sub
        })
        .await;
        let handler = GetSubscriptionStatusHandler::new(Arc::new(store.clone()));

        let status = handler
            .handle(GetSubscriptionStatusQuery { user_id })
            .await
            .unwrap();
        let again = handler
            .handle(GetSubscriptionStatusQuery { user_id })
            .await
            .unwrap();

        assert_eq!(status.usage.remaining, FREE_DAILY_LIMIT - 2);
        assert_eq!(again.usage, status.usage);
        assert_eq!(status.subscription.daily_usage_count, 2);
    }

    #[tokio::test]
    async fn stale_counter_reads_as_full_allowance() {
        let (store, user_id) = store_with(|id| {
            let mut sub = Subscription::new_free(id, Timestamp::now().minus_days(3));
            sub.daily_usage_count = FREE_DAILY_LIMIT;
            sub
        })
        .await;
        let handler = GetSubscriptionStatusHandler::new(Arc::new(store));

        let status = handler
            .handle(GetSubscriptionStatusQuery { user_id })
            .await
            .unwrap();

        assert_eq!(status.usage.remaining, FREE_DAILY_LIMIT);
    }

    #[tokio::test]
    async fn expired_premium_is_lapsed_and_stored() {
        let (store, user_id) = store_with(|id| {
            let mut sub = Subscription::new_free(id, Timestamp::now());
            sub.activate(PlanType::Weekly, Timestamp::now().minus_days(10));
            sub
        })
        .await;
        let handler = GetSubscriptionStatusHandler::new(Arc::new(store.clone()));

        let status = handler
            .handle(GetSubscriptionStatusQuery { user_id })
            .await
            .unwrap();

        assert!(!status.usage.is_premium);
        let stored = SubscriptionRepository::find_by_user_id(&store, &user_id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_premium);
        assert_eq!(stored.plan_type, None);
    }

    #[tokio::test]
    async fn active_premium_reports_unlimited() {
        let (store, user_id) = store_with(|id| {
            let mut sub = Subscription::new_free(id, Timestamp::now());
            sub.activate(PlanType::Monthly, Timestamp::now());
            sub
        })
        .await;
        let handler = GetSubscriptionStatusHandler::new(Arc::new(store));

        let status = handler
            .handle(GetSubscriptionStatusQuery { user_id })
            .await
            .unwrap();

        assert_eq!(status.usage.remaining, UNLIMITED);
        assert_eq!(status.subscription.plan_type, Some(PlanType::Monthly));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = GetSubscriptionStatusHandler::new(Arc::new(InMemoryStore::new()));
        let user_id = UserId::new();

        let err = handler
            .handle(GetSubscriptionStatusQuery { user_id })
            .await
            .unwrap_err();

        assert_eq!(err, SubscriptionError::not_found_for_user(user_id));
    }
}
