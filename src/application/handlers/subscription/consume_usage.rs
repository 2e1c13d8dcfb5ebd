//! ConsumeUsageHandler - the usage gate in front of every generation.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{SubscriptionError, UsageSummary};
use crate::ports::SubscriptionRepository;

use super::settle_expiry;

/// Command to consume one generation from a user's allowance.
#[derive(Debug, Clone)]
pub struct ConsumeUsageCommand {
    pub user_id: UserId,
}

/// Handler that admits or rejects one unit of usage.
pub struct ConsumeUsageHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl ConsumeUsageHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    /// Applies expiry and the daily reset, then admits or rejects.
    ///
    /// Any lapse or reset is persisted even when the request is rejected.
    /// Only the usage columns are written back; the plan columns change only
    /// through the guarded lapse in `settle_expiry`.
    pub async fn handle(&self, cmd: ConsumeUsageCommand) -> Result<UsageSummary, SubscriptionError> {
        let now = Timestamp::now();
        let found = self
            .subscriptions
            .find_by_user_id(&cmd.user_id)
            .await?
            .ok_or(SubscriptionError::not_found_for_user(cmd.user_id))?;
        let mut subscription = settle_expiry(self.subscriptions.as_ref(), found, now).await?;

        let before = (subscription.daily_usage_count, subscription.last_reset_date);
        let outcome = subscription.consume(now, now.utc_date());

        if (subscription.daily_usage_count, subscription.last_reset_date) != before {
            self.subscriptions.update_usage(&subscription).await?;
        }

        match &outcome {
            Ok(usage) => tracing::debug!(
                user_id = %cmd.user_id,
                remaining = usage.remaining,
                is_premium = usage.is_premium,
                "Usage admitted"
            ),
            Err(SubscriptionError::QuotaExceeded { limit }) => {
                tracing::info!(user_id = %cmd.user_id, limit, "Daily quota exceeded")
            }
            Err(_) => {}
        }

        outcome
    }
}
