//! Anonymous app users.
//!
//! A user is nothing more than an opaque id handed to a device. Plan and
//! quota state live on the user's [`Subscription`](crate::domain::subscription::Subscription).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// Anonymous user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub created_at: Timestamp,
}

impl User {
    /// Issues a fresh anonymous identity.
    pub fn new_anonymous(now: Timestamp) -> Self {
        Self {
            id: UserId::new(),
            created_at: now,
        }
    }

    /// Reconstitutes a stored user.
    pub fn from_parts(id: UserId, created_at: Timestamp) -> Self {
        Self { id, created_at }
    }
}
