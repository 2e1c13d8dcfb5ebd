//! Profile handlers.
//!
//! ## Commands
//! - Create, update and delete conversation-partner profiles
//!
//! ## Queries
//! - Get one profile, list a user's profiles

mod create_profile;
mod delete_profile;
mod get_profile;
mod list_profiles;
mod update_profile;

// Commands
pub use create_profile::{CreateProfileCommand, CreateProfileHandler};
pub use delete_profile::{DeleteProfileCommand, DeleteProfileHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};

// Queries
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use list_profiles::{ListProfilesHandler, ListProfilesQuery};
