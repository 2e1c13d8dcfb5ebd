//! Conversation-partner profiles.
//!
//! A profile describes the person the user is chatting with. When a
//! generation request names a profile, its details are folded into the
//! prompt.

mod aggregate;

pub use aggregate::{Profile, ProfileChanges, ProfileDraft};
pub use aggregate::{AGE_MAX, AGE_MIN, GENDER_MAX_CHARS, NAME_MAX_CHARS};
