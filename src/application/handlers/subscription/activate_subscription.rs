//! ActivateSubscriptionHandler - Command handler for starting a paid plan.

use std::sync::Arc;

use super::SubscriptionStatus;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::subscription::{PlanType, Subscription, SubscriptionError};
use crate::ports::{SubscriptionRepository, UserRepository};

/// Command to activate a plan for a user.
#[derive(Debug, Clone)]
pub struct ActivateSubscriptionCommand {
    pub user_id: UserId,
    /// Raw plan name as received; parsed by the handler.
    pub plan_type: String,
}

/// Handler for plan activation.
pub struct ActivateSubscriptionHandler {
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl ActivateSubscriptionHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            users,
            subscriptions,
        }
    }

    pub async fn handle(
        &self,
        cmd: ActivateSubscriptionCommand,
    ) -> Result<SubscriptionStatus, SubscriptionError> {
        // 1. Reject unknown plans before touching storage
        let plan: PlanType = cmd.plan_type.parse()?;

        // 2. The user must exist
        if !self.users.exists(&cmd.user_id).await? {
            return Err(SubscriptionError::user_not_found(cmd.user_id));
        }

        let now = Timestamp::now();

        // 3. Activate, creating the record if it is missing
        let subscription = match self.subscriptions.find_by_user_id(&cmd.user_id).await? {
            Some(mut existing) => {
                existing.activate(plan, now);
                self.subscriptions.update_plan(&existing).await?;
                existing
            }
            None => {
                let mut created = Subscription::new_free(cmd.user_id, now);
                created.activate(plan, now);
                self.subscriptions.save(&created).await?;
                created
            }
        };

        tracing::info!(
            user_id = %cmd.user_id,
            plan = %plan,
            "Subscription activated"
        );

        Ok(SubscriptionStatus::at(subscription, now))
    }
}
