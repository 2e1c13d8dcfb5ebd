//! Request/response DTOs for the auth endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::IssueAnonymousUserResult;

/// Request body for `POST /auth/anonymous`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnonymousAuthRequest {
    /// Previously issued ID, if the app stored one.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response for `POST /auth/anonymous`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymousAuthResponse {
    pub user_id: String,
    pub is_premium: bool,
}

impl From<IssueAnonymousUserResult> for AnonymousAuthResponse {
    fn from(result: IssueAnonymousUserResult) -> Self {
        Self {
            user_id: result.user_id.to_string(),
            is_premium: result.is_premium,
        }
    }
}
