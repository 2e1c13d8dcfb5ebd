//! Axum router configuration for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_profile, delete_profile, get_profile, list_profiles, update_profile};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/profiles`.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route(
            "/:profile_id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}
