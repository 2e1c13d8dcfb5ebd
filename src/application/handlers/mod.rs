//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;
pub mod subscription;
pub mod suggestion;
pub mod user;

pub use profile::{
    CreateProfileCommand, CreateProfileHandler, DeleteProfileCommand, DeleteProfileHandler,
    GetProfileHandler, GetProfileQuery, ListProfilesHandler, ListProfilesQuery,
    UpdateProfileCommand, UpdateProfileHandler,
};
pub use subscription::{
    ActivateSubscriptionCommand, ActivateSubscriptionHandler, ConsumeUsageCommand,
    ConsumeUsageHandler, GetSubscriptionStatusHandler, GetSubscriptionStatusQuery,
    SubscriptionStatus,
};
pub use suggestion::{
    GenerateFromImageCommand, GenerateFromImageHandler, GenerateSuggestionsCommand,
    GenerateSuggestionsHandler, GeneratedFromImage, GeneratedSuggestions, GenerationSettings,
    ListHistoryHandler, ListHistoryQuery, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};
pub use user::{IssueAnonymousUserCommand, IssueAnonymousUserHandler, IssueAnonymousUserResult};
