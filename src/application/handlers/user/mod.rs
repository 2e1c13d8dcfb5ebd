//! User handlers.
//!
//! Anonymous users are issued on first launch; every user starts on the
//! free tier.

mod issue_anonymous_user;

pub use issue_anonymous_user::{
    IssueAnonymousUserCommand, IssueAnonymousUserHandler, IssueAnonymousUserResult,
};
