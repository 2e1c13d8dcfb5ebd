//! User repository port.
//!
//! Users and their subscriptions are born together, so creation goes through
//! a single method that persists both in one transaction.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::subscription::Subscription;
use crate::domain::user::User;

/// Repository port for anonymous users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user together with its initial subscription.
    ///
    /// Either both rows are written or neither is.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create_with_subscription(
        &self,
        user: &User,
        subscription: &Subscription,
    ) -> Result<(), DomainError>;

    /// Find a user by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Whether a user with this ID exists.
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
