//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps and the error vocabulary used by every other
//! domain module.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{HistoryEntryId, ProfileId, UserId};
pub use timestamp::Timestamp;
