//! IssueAnonymousUserHandler - get-or-create for anonymous users.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::subscription::Subscription;
use crate::domain::user::User;
use crate::ports::{SubscriptionRepository, UserRepository};

use crate::application::handlers::subscription::settle_expiry;

/// Command to issue (or re-confirm) an anonymous user.
#[derive(Debug, Clone, Default)]
pub struct IssueAnonymousUserCommand {
    /// Previously issued ID, if the client has one.
    pub user_id: Option<UserId>,
}

/// Result of issuing an anonymous user.
#[derive(Debug, Clone)]
pub struct IssueAnonymousUserResult {
    pub user_id: UserId,
    pub is_premium: bool,
    /// Whether a new user was created by this call.
    pub created: bool,
}

/// Handler for anonymous user issuance.
pub struct IssueAnonymousUserHandler {
    users: Arc<dyn UserRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl IssueAnonymousUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            users,
            subscriptions,
        }
    }

    /// Reuses a known user or creates a new one with a free subscription.
    ///
    /// An unknown `user_id` is not adopted; a fresh ID is issued instead.
    pub async fn handle(
        &self,
        cmd: IssueAnonymousUserCommand,
    ) -> Result<IssueAnonymousUserResult, DomainError> {
        let now = Timestamp::now();

        if let Some(user_id) = cmd.user_id {
            if self.users.find_by_id(&user_id).await?.is_some() {
                let is_premium = self.current_premium(user_id, now).await?;
                return Ok(IssueAnonymousUserResult {
                    user_id,
                    is_premium,
                    created: false,
                });
            }
            tracing::debug!(user_id = %user_id, "Unknown user id supplied, issuing a new one");
        }

        let user = User::new_anonymous(now);
        let subscription = Subscription::new_free(user.id, now);
        self.users
            .create_with_subscription(&user, &subscription)
            .await?;

        tracing::info!(user_id = %user.id, "Anonymous user created");

        Ok(IssueAnonymousUserResult {
            user_id: user.id,
            is_premium: false,
            created: true,
        })
    }

    /// Premium flag after expiry; backfills a missing subscription.
    async fn current_premium(&self, user_id: UserId, now: Timestamp) -> Result<bool, DomainError> {
        match self.subscriptions.find_by_user_id(&user_id).await? {
            Some(subscription) => {
                let settled = settle_expiry(self.subscriptions.as_ref(), subscription, now).await?;
                Ok(settled.is_premium)
            }
            None => {
                tracing::warn!(user_id = %user_id, "User had no subscription, creating one");
                self.subscriptions
                    .save(&Subscription::new_free(user_id, now))
                    .await?;
                Ok(false)
            }
        }
    }
}
