//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, UserId};
use crate::domain::profile::Profile;

/// Repository port for conversation-partner profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Save a new profile.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the owning user does not exist
    /// - `DatabaseError` on persistence failure
    async fn save(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Update an existing profile.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Find a profile by ID.
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError>;

    /// All profiles of a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Profile>, DomainError>;

    /// Delete a profile.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &ProfileId) -> Result<(), DomainError>;
}
