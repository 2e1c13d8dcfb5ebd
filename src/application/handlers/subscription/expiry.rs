//! Persisting premium expiry without racing activation.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::subscription::Subscription;
use crate::ports::SubscriptionRepository;

/// Persists a lapse for an expired premium record and returns the state to
/// decide on.
///
/// The lapse write is guarded by the observed expiry. When it finds the term
/// already changed, the stored record is reloaded and evaluated in memory.
pub(crate) async fn settle_expiry(
    subscriptions: &dyn SubscriptionRepository,
    mut subscription: Subscription,
    now: Timestamp,
) -> Result<Subscription, DomainError> {
    let expired_at = match subscription.expires_at {
        Some(expires_at) if subscription.is_expired_at(now) => expires_at,
        _ => return Ok(subscription),
    };

    let user_id = subscription.user_id;
    if subscriptions.record_lapse(&user_id, expired_at, now).await? {
        tracing::info!(user_id = %user_id, "Premium subscription lapsed");
        subscription.lapse_if_expired(now);
        return Ok(subscription);
    }

    tracing::debug!(user_id = %user_id, "Plan changed since read, reloading");
    let mut current = subscriptions
        .find_by_user_id(&user_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::SubscriptionNotFound, "Subscription not found"))?;
    current.lapse_if_expired(now);
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::UserId;
    use crate::domain::subscription::PlanType;
    use crate::domain::user::User;
    use crate::ports::UserRepository;

    async fn seeded(sub_for: impl FnOnce(UserId) -> Subscription) -> (InMemoryStore, Subscription) {
        let store = InMemoryStore::new();
        let user = User::new_anonymous(Timestamp::now());
        let sub = sub_for(user.id);
        store.create_with_subscription(&user, &sub).await.unwrap();
        (store, sub)
    }

    fn expired_weekly(user_id: UserId) -> Subscription {
        let mut sub = Subscription::new_free(user_id, Timestamp::now());
        sub.activate(PlanType::Weekly, Timestamp::now().minus_days(8));
        sub
    }

    #[tokio::test]
    async fn active_record_is_returned_untouched() {
        let (store, sub) = seeded(|id| {
            let mut sub = Subscription::new_free(id, Timestamp::now());
            sub.activate(PlanType::Monthly, Timestamp::now());
            sub
        })
        .await;

        let settled = settle_expiry(&store, sub.clone(), Timestamp::now()).await.unwrap();

        assert_eq!(settled, sub);
    }

    #[tokio::test]
    async fn expired_record_is_lapsed_in_store() {
        let (store, sub) = seeded(expired_weekly).await;
        let user_id = sub.user_id;

        let settled = settle_expiry(&store, sub, Timestamp::now()).await.unwrap();

        assert!(!settled.is_premium);
        let stored = SubscriptionRepository::find_by_user_id(&store, &user_id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_premium);
        assert_eq!(stored.expires_at, None);
    }

    #[tokio::test]
    async fn stale_read_defers_to_renewed_record() {
        let (store, stale) = seeded(expired_weekly).await;
        let mut renewed = stale.clone();
        renewed.activate(PlanType::Monthly, Timestamp::now());
        store.update_plan(&renewed).await.unwrap();

        let settled = settle_expiry(&store, stale, Timestamp::now()).await.unwrap();

        assert!(settled.is_premium);
        assert_eq!(settled.plan_type, Some(PlanType::Monthly));
        let stored = SubscriptionRepository::find_by_user_id(&store, &renewed.user_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_premium);
    }
}
