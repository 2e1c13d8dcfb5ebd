//! UpdateProfileHandler - Command handler for partial profile edits.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp};
use crate::domain::profile::{Profile, ProfileChanges};
use crate::ports::ProfileRepository;

/// Command to update the provided fields of a profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub profile_id: ProfileId,
    pub changes: ProfileChanges,
}

/// Handler for profile updates.
pub struct UpdateProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl UpdateProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<Profile, DomainError> {
        let mut profile = self
            .profiles
            .find_by_id(&cmd.profile_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        if cmd.changes.is_empty() {
            return Ok(profile);
        }

        profile.apply(cmd.changes, Timestamp::now())?;
        self.profiles.update(&profile).await?;

        tracing::debug!(profile_id = %profile.id, "Profile updated");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::profile::ProfileDraft;
    use crate::domain::subscription::Subscription;
    use crate::domain::user::User;
    use crate::ports::UserRepository;

    async fn stored_profile(store: &InMemoryStore) -> Profile {
        let now = Timestamp::now().minus_secs(60);
        let user = User::new_anonymous(now);
        store
            .create_with_subscription(&user, &Subscription::new_free(user.id, now))
            .await
            .unwrap();
        let profile = Profile::create(
            user.id,
            ProfileDraft {
                name: "Mina".to_string(),
                age: Some(25),
                memo: Some("met at a cafe".to_string()),
                ..ProfileDraft::default()
            },
            now,
        )
        .unwrap();
        store.save(&profile).await.unwrap();
        profile
    }

    #[tokio::test]
    async fn only_provided_fields_change() {
        let store = InMemoryStore::new();
        let original = stored_profile(&store).await;
        let handler = UpdateProfileHandler::new(Arc::new(store.clone()));

        let updated = handler
            .handle(UpdateProfileCommand {
                profile_id: original.id,
                changes: ProfileChanges {
                    age: Some(26),
                    ..ProfileChanges::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.age, Some(26));
        assert_eq!(updated.name, "Mina");
        assert_eq!(updated.memo, original.memo);
        assert!(updated.updated_at.is_after(&original.updated_at));
        let stored = ProfileRepository::find_by_id(&store, &original.id)
            .await
            .unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn invalid_change_leaves_profile_untouched() {
        let store = InMemoryStore::new();
        let original = stored_profile(&store).await;
        let handler = UpdateProfileHandler::new(Arc::new(store.clone()));

        let err = handler
            .handle(UpdateProfileCommand {
                profile_id: original.id,
                changes: ProfileChanges {
                    name: Some("Jisoo".to_string()),
                    age: Some(0),
                    ..ProfileChanges::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let stored = ProfileRepository::find_by_id(&store, &original.id)
            .await
            .unwrap();
        assert_eq!(stored, Some(original));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = UpdateProfileHandler::new(Arc::new(InMemoryStore::new()));

        let err = handler
            .handle(UpdateProfileCommand {
                profile_id: ProfileId::new(),
                changes: ProfileChanges::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }
}
