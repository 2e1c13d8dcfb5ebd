//! API error type shared by every endpoint.
//!
//! # HTTP Status Mapping
//!
//! | ErrorCode | HTTP Status |
//! |-----------|-------------|
//! | ValidationFailed, InvalidPlanType, NoUsableText | 400 |
//! | UserNotFound, SubscriptionNotFound, ProfileNotFound | 404 |
//! | QuotaExceeded | 429 |
//! | AIProviderError, OcrProviderError | 502 |
//! | DatabaseError, InternalError | 500 |
//!
//! Upstream and infrastructure failures are answered with a fixed message;
//! their detail only reaches the server log.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::subscription::SubscriptionError;

const UPSTREAM_MESSAGE: &str =
    "Suggestion service is temporarily unavailable. Please try again in a moment.";
const INTERNAL_MESSAGE: &str = "Something went wrong on our side. Please try again.";

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Wrapper that turns a [`DomainError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        self.0.code
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.0.code)
    }
}

/// Maps an error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidPlanType | ErrorCode::NoUsableText => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::UserNotFound | ErrorCode::SubscriptionNotFound | ErrorCode::ProfileNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::AIProviderError | ErrorCode::OcrProviderError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(ErrorCode::ValidationFailed, rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::new(ErrorCode::ValidationFailed, rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.code;
        let status = status_for(code);

        let body = if code.is_upstream() {
            ErrorResponse::new(code.to_string(), UPSTREAM_MESSAGE)
        } else if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %code, error = %self.0.message, "Request failed");
            ErrorResponse::new(code.to_string(), INTERNAL_MESSAGE)
        } else {
            let details = (!self.0.details.is_empty())
                .then(|| self.0.details.into_iter().collect::<BTreeMap<_, _>>());
            ErrorResponse {
                code: code.to_string(),
                message: self.0.message,
                details,
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(status_for(ErrorCode::InvalidPlanType), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::NoUsableText), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::ProfileNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::QuotaExceeded), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_for(ErrorCode::OcrProviderError), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn quota_error_carries_limit_detail() {
        let (status, body) = body_of(SubscriptionError::quota_exceeded(5).into()).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body.code, "QUOTA_EXCEEDED");
        assert_eq!(body.details.unwrap().get("limit").map(String::as_str), Some("5"));
    }

    #[tokio::test]
    async fn upstream_detail_is_not_leaked() {
        let err = DomainError::new(ErrorCode::AIProviderError, "sk-live-secret rejected");

        let (status, body) = body_of(err.into()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.message, UPSTREAM_MESSAGE);
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn database_detail_is_not_leaked() {
        let (status, body) = body_of(DomainError::database("relation users does not exist").into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "DATABASE_ERROR");
        assert_eq!(body.message, INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let user_id = UserId::new();
        let (status, body) = body_of(SubscriptionError::user_not_found(user_id).into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "USER_NOT_FOUND");
        assert!(body.message.contains(&user_id.to_string()));
    }

    #[tokio::test]
    async fn validation_error_names_the_field() {
        let (status, body) = body_of(ValidationError::empty_field("name").into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_FAILED");
        assert_eq!(body.details.unwrap().get("field").map(String::as_str), Some("name"));
    }
}
