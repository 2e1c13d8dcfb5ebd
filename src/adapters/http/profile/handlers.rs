//! HTTP handlers for profile endpoints.
//!
//! Profiles are addressed by ID alone; the caller's `user_id` is only
//! needed to create and list them.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateProfileCommand, DeleteProfileCommand, GetProfileQuery, ListProfilesQuery,
    UpdateProfileCommand,
};
use crate::domain::foundation::{ProfileId, UserId};

use super::dto::{
    CreateProfileRequest, ListProfilesParams, ProfileListResponse, ProfileResponse,
    UpdateProfileRequest,
};

/// POST /profiles - Create a profile
pub async fn create_profile(
    State(state): State<AppState>,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let user_id = UserId::parse(&req.user_id)?;

    let profile = state
        .create_profile_handler()
        .handle(CreateProfileCommand {
            user_id,
            draft: req.into_draft(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse::from(profile))))
}

/// GET /profiles?user_id= - List a user's profiles
pub async fn list_profiles(
    State(state): State<AppState>,
    params: Result<Query<ListProfilesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let user_id = UserId::parse(&params.user_id)?;

    let profiles = state
        .list_profiles_handler()
        .handle(ListProfilesQuery { user_id })
        .await?;

    Ok(Json(ProfileListResponse::from(profiles)))
}

/// GET /profiles/:profile_id - Get one profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let profile_id = ProfileId::parse(&profile_id)?;

    let profile = state
        .get_profile_handler()
        .handle(GetProfileQuery { profile_id })
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// PUT /profiles/:profile_id - Update the supplied fields
pub async fn update_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let profile_id = ProfileId::parse(&profile_id)?;
    let Json(req) = payload?;

    let profile = state
        .update_profile_handler()
        .handle(UpdateProfileCommand {
            profile_id,
            changes: req.into(),
        })
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// DELETE /profiles/:profile_id - Delete a profile
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let profile_id = ProfileId::parse(&profile_id)?;

    state
        .delete_profile_handler()
        .handle(DeleteProfileCommand { profile_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
