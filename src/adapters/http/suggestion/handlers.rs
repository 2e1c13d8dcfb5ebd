//! HTTP handlers for generation endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    GenerateFromImageCommand, GenerateSuggestionsCommand, ListHistoryQuery,
};
use crate::domain::foundation::UserId;
use crate::domain::suggestion::Conversation;

use super::dto::{
    GenerateImageRequest, GenerateImageResponse, GenerateRequest, GenerateResponse,
    HistoryEntryResponse, HistoryParams, HistoryResponse,
};

/// POST /rizz/generate - Reply suggestions for a pasted conversation
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let cmd = GenerateSuggestionsCommand {
        user_id: UserId::parse(&req.user_id)?,
        conversation: Conversation::from_text(&req.conversation)?,
        context: req.fields.context()?,
        profile_id: req.fields.profile_id()?,
    };

    tracing::info!(
        user_id = %cmd.user_id,
        platform = %cmd.context.platform,
        relationship = %cmd.context.relationship,
        num_suggestions = cmd.context.num_suggestions,
        has_profile = cmd.profile_id.is_some(),
        "Generate suggestions called"
    );

    let result = state.generate_suggestions_handler().handle(cmd).await?;

    Ok(Json(GenerateResponse::from(result)))
}

/// POST /rizz/generate-image - Reply suggestions for a chat screenshot
pub async fn generate_from_image(
    State(state): State<AppState>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let cmd = GenerateFromImageCommand {
        user_id: UserId::parse(&req.user_id)?,
        image: req.image(state.max_image_bytes)?,
        context: req.fields.context()?,
        profile_id: req.fields.profile_id()?,
    };

    tracing::info!(
        user_id = %cmd.user_id,
        image_bytes = cmd.image.len(),
        format = cmd.image.format.as_str(),
        "Generate from image called"
    );

    let result = state.generate_from_image_handler().handle(cmd).await?;

    Ok(Json(GenerateImageResponse::from(result)))
}

/// GET /rizz/history - Most recent generations for a user
pub async fn list_history(
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let user_id = UserId::parse(&params.user_id)?;

    let entries = state
        .list_history_handler()
        .handle(ListHistoryQuery {
            user_id,
            limit: params.limit,
        })
        .await?;

    Ok(Json(HistoryResponse {
        history: entries.into_iter().map(HistoryEntryResponse::from).collect(),
    }))
}
