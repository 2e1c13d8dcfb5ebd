//! Axum router configuration for auth endpoints.

use axum::{routing::post, Router};

use super::handlers::issue_anonymous_user;
use crate::adapters::http::state::AppState;

/// Routes mounted at `/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/anonymous", post(issue_anonymous_user))
}
