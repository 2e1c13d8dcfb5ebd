//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure; all of
//! them share [`AppState`] and report failures through [`ApiError`].

pub mod auth;
pub mod billing;
pub mod error;
pub mod health;
pub mod profile;
pub mod router;
pub mod state;
pub mod suggestion;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, RouterOptions};
pub use state::AppState;
