//! Axum router configuration for generation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{generate, generate_from_image, list_history};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/rizz`.
pub fn suggestion_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate))
        .route("/generate-image", post(generate_from_image))
        .route("/history", get(list_history))
}
