//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `subscription` - Paid plans, expiry, and the daily usage gate
//! - `user` - Anonymous user identities
//! - `profile` - Conversation-partner profiles
//! - `suggestion` - Prompt building, output parsing, and history

pub mod foundation;
pub mod profile;
pub mod subscription;
pub mod suggestion;
pub mod user;
