//! HTTP adapter for anonymous user issuance.
//!
//! - `POST /auth/anonymous` - Issue or re-confirm an anonymous user

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::auth_routes;
