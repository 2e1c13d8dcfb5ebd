//! Axum router configuration for subscription endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_status, subscribe};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/billing`.
pub fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/status", get(get_status))
}
