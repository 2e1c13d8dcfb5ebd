//! HTTP handlers for the auth endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::IssueAnonymousUserCommand;
use crate::domain::foundation::UserId;

use super::dto::{AnonymousAuthRequest, AnonymousAuthResponse};

/// POST /auth/anonymous - Issue a new anonymous user or reuse a known one
///
/// A malformed stored ID is treated like an unknown one: a fresh user is
/// issued so the app can recover.
pub async fn issue_anonymous_user(
    State(state): State<AppState>,
    payload: Result<Json<AnonymousAuthRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    let user_id = req.user_id.as_deref().and_then(|raw| match UserId::parse(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(supplied = raw, "Ignoring malformed user id");
            None
        }
    });

    let result = state
        .issue_anonymous_user_handler()
        .handle(IssueAnonymousUserCommand { user_id })
        .await?;

    Ok(Json(AnonymousAuthResponse::from(result)))
}
