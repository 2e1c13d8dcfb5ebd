//! Request/response DTOs for profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::profile::{Profile, ProfileChanges, ProfileDraft};

/// Request body for `POST /profiles`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl CreateProfileRequest {
    pub fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            name: self.name,
            age: self.age,
            gender: self.gender,
            memo: self.memo,
        }
    }
}

/// Request body for `PUT /profiles/:profile_id`. Omitted fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileChanges {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            gender: req.gender,
            memo: req.memo,
        }
    }
}

/// Query string for `GET /profiles`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListProfilesParams {
    pub user_id: String,
}

/// A single profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub memo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            name: profile.name,
            age: profile.age,
            gender: profile.gender,
            memo: profile.memo,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Response for `GET /profiles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<ProfileResponse>,
}

impl From<Vec<Profile>> for ProfileListResponse {
    fn from(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(ProfileResponse::from).collect(),
        }
    }
}
