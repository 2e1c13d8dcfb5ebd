//! Top-level router assembly.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::billing::billing_routes;
use super::health::health;
use super::profile::profile_routes;
use super::state::AppState;
use super::suggestion::suggestion_routes;

/// Room for JSON framing around a base64 image.
const BODY_OVERHEAD: usize = 64 * 1024;

/// Cross-cutting HTTP settings applied around every route.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Allowed browser origins; `*` allows any. Empty disables CORS.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the complete API router.
///
/// # Routes
/// - `GET /health`
/// - `/auth/*`, `/billing/*`, `/profiles/*`, `/rizz/*`
pub fn api_router(state: AppState, options: RouterOptions) -> Router {
    // base64 inflates by 4/3
    let body_limit = state.max_image_bytes / 3 * 4 + BODY_OVERHEAD;

    let router = Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_routes())
        .nest("/billing", billing_routes())
        .nest("/profiles", profile_routes())
        .nest("/rizz", suggestion_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(options.request_timeout));

    let router = match cors_layer(&options.cors_origins) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return Some(layer.allow_origin(Any));
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    Some(layer.allow_origin(allowed))
}
