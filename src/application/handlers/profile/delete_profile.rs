//! DeleteProfileHandler - Command handler for removing a profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ProfileId};
use crate::ports::ProfileRepository;

/// Command to delete a profile.
#[derive(Debug, Clone)]
pub struct DeleteProfileCommand {
    pub profile_id: ProfileId,
}

/// Handler for profile deletion.
pub struct DeleteProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl DeleteProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Fails with `ProfileNotFound` when nothing was deleted.
    pub async fn handle(&self, cmd: DeleteProfileCommand) -> Result<(), DomainError> {
        self.profiles.delete(&cmd.profile_id).await?;
        tracing::info!(profile_id = %cmd.profile_id, "Profile deleted");
        Ok(())
    }
}
