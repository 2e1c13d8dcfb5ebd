//! HTTP handlers for subscription endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{ActivateSubscriptionCommand, GetSubscriptionStatusQuery};
use crate::domain::foundation::UserId;

use super::dto::{StatusQuery, SubscribeRequest, SubscriptionStatusResponse};

/// POST /billing/subscribe - Activate a paid plan
///
/// Store receipt verification happens outside this service.
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let user_id = UserId::parse(&req.user_id)?;

    let status = state
        .activate_subscription_handler()
        .handle(ActivateSubscriptionCommand {
            user_id,
            plan_type: req.plan_type,
        })
        .await?;

    Ok(Json(SubscriptionStatusResponse::from(status)))
}

/// GET /billing/status - Current plan and today's quota, without consuming
pub async fn get_status(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let user_id = UserId::parse(&query.user_id)?;

    let status = state
        .subscription_status_handler()
        .handle(GetSubscriptionStatusQuery { user_id })
        .await?;

    Ok(Json(SubscriptionStatusResponse::from(status)))
}
