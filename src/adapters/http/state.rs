//! Shared application state.

use std::sync::Arc;

use crate::application::handlers::{
    ActivateSubscriptionHandler, CreateProfileHandler, DeleteProfileHandler,
    GenerateFromImageHandler, GenerateSuggestionsHandler, GenerationSettings, GetProfileHandler,
    GetSubscriptionStatusHandler, IssueAnonymousUserHandler, ListHistoryHandler,
    ListProfilesHandler, UpdateProfileHandler,
};
use crate::ports::{
    AIProvider, MessageHistoryRepository, OcrProvider, ProfileRepository, SubscriptionRepository,
    UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every dependency is behind an `Arc`. Providers are
/// constructed once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub history: Arc<dyn MessageHistoryRepository>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub ocr_provider: Arc<dyn OcrProvider>,
    pub generation: GenerationSettings,
    /// Largest decoded screenshot accepted by the image endpoint.
    pub max_image_bytes: usize,
}

impl AppState {
    /// Wires every repository port to one store, e.g. the in-memory adapter.
    pub fn with_store<S>(
        store: S,
        ai_provider: Arc<dyn AIProvider>,
        ocr_provider: Arc<dyn OcrProvider>,
    ) -> Self
    where
        S: UserRepository
            + SubscriptionRepository
            + ProfileRepository
            + MessageHistoryRepository
            + Clone
            + 'static,
    {
        Self {
            users: Arc::new(store.clone()),
            subscriptions: Arc::new(store.clone()),
            profiles: Arc::new(store.clone()),
            history: Arc::new(store),
            ai_provider,
            ocr_provider,
            generation: GenerationSettings::default(),
            max_image_bytes: 10 * 1024 * 1024,
        }
    }

    // Create handlers on demand from the shared state.

    pub fn issue_anonymous_user_handler(&self) -> IssueAnonymousUserHandler {
        IssueAnonymousUserHandler::new(self.users.clone(), self.subscriptions.clone())
    }

    pub fn activate_subscription_handler(&self) -> ActivateSubscriptionHandler {
        ActivateSubscriptionHandler::new(self.users.clone(), self.subscriptions.clone())
    }

    pub fn subscription_status_handler(&self) -> GetSubscriptionStatusHandler {
        GetSubscriptionStatusHandler::new(self.subscriptions.clone())
    }

    pub fn create_profile_handler(&self) -> CreateProfileHandler {
        CreateProfileHandler::new(self.users.clone(), self.profiles.clone())
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profiles.clone())
    }

    pub fn list_profiles_handler(&self) -> ListProfilesHandler {
        ListProfilesHandler::new(self.profiles.clone())
    }

    pub fn update_profile_handler(&self) -> UpdateProfileHandler {
        UpdateProfileHandler::new(self.profiles.clone())
    }

    pub fn delete_profile_handler(&self) -> DeleteProfileHandler {
        DeleteProfileHandler::new(self.profiles.clone())
    }

    pub fn generate_suggestions_handler(&self) -> GenerateSuggestionsHandler {
        GenerateSuggestionsHandler::new(
            self.subscriptions.clone(),
            self.profiles.clone(),
            self.history.clone(),
            self.ai_provider.clone(),
            self.generation,
        )
    }

    pub fn generate_from_image_handler(&self) -> GenerateFromImageHandler {
        GenerateFromImageHandler::new(
            self.ocr_provider.clone(),
            Arc::new(self.generate_suggestions_handler()),
        )
    }

    pub fn list_history_handler(&self) -> ListHistoryHandler {
        ListHistoryHandler::new(self.history.clone())
    }
}
