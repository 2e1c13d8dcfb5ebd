//! CreateProfileHandler - Command handler for adding a conversation partner.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::profile::{Profile, ProfileDraft};
use crate::ports::{ProfileRepository, UserRepository};

/// Command to create a profile.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub user_id: UserId,
    pub draft: ProfileDraft,
}

/// Handler for profile creation.
pub struct CreateProfileHandler {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { users, profiles }
    }

    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<Profile, DomainError> {
        let profile = Profile::create(cmd.user_id, cmd.draft, Timestamp::now())?;

        if !self.users.exists(&cmd.user_id).await? {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }

        self.profiles.save(&profile).await?;

        tracing::info!(user_id = %cmd.user_id, profile_id = %profile.id, "Profile created");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::subscription::Subscription;
    use crate::domain::user::User;

    async fn seeded() -> (InMemoryStore, UserId) {
        let store = InMemoryStore::new();
        let now = Timestamp::now();
        let user = User::new_anonymous(now);
        store
            .create_with_subscription(&user, &Subscription::new_free(user.id, now))
            .await
            .unwrap();
        (store, user.id)
    }

    fn handler(store: &InMemoryStore) -> CreateProfileHandler {
        CreateProfileHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn creates_profile_for_existing_user() {
        let (store, user_id) = seeded().await;

        let profile = handler(&store)
            .handle(CreateProfileCommand {
                user_id,
                draft: ProfileDraft {
                    name: "  지수 ".to_string(),
                    age: Some(27),
                    gender: Some("female".to_string()),
                    memo: Some("likes hiking".to_string()),
                },
            })
            .await
            .unwrap();

        assert_eq!(profile.name, "지수");
        assert_eq!(profile.user_id, user_id);
        assert_eq!(store.list_by_user(&user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = InMemoryStore::new();

        let err = handler(&store)
            .handle(CreateProfileCommand {
                user_id: UserId::new(),
                draft: ProfileDraft {
                    name: "Mina".to_string(),
                    ..ProfileDraft::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn invalid_age_is_rejected_before_storage() {
        let (store, user_id) = seeded().await;

        let err = handler(&store)
            .handle(CreateProfileCommand {
                user_id,
                draft: ProfileDraft {
                    name: "Mina".to_string(),
                    age: Some(151),
                    ..ProfileDraft::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(store.list_by_user(&user_id).await.unwrap().is_empty());
    }
}
