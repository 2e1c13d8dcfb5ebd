//! GetProfileHandler - Query handler for a single profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Query for one profile by ID.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub profile_id: ProfileId,
}

/// Handler for profile lookup.
pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Profile, DomainError> {
        self.profiles
            .find_by_id(&query.profile_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))
    }
}
