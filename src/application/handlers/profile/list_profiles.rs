//! ListProfilesHandler - Query handler for a user's profiles.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Query for every profile a user owns.
#[derive(Debug, Clone)]
pub struct ListProfilesQuery {
    pub user_id: UserId,
}

/// Handler listing profiles newest first.
pub struct ListProfilesHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl ListProfilesHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// An unknown user simply has no profiles.
    pub async fn handle(&self, query: ListProfilesQuery) -> Result<Vec<Profile>, DomainError> {
        self.profiles.list_by_user(&query.user_id).await
    }
}
