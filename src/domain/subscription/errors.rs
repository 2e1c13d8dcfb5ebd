//! Subscription-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFoundForUser | 404 |
//! | UserNotFound | 404 |
//! | InvalidPlanType | 400 |
//! | QuotaExceeded | 429 |
//! | Port | by its code |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Subscription-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// No subscription row exists for this user.
    NotFoundForUser(UserId),

    /// The user itself does not exist.
    UserNotFound(UserId),

    /// Requested plan is not one of the supported plans.
    InvalidPlanType(String),

    /// Free-tier daily limit already reached.
    QuotaExceeded { limit: i32 },

    /// Non-infrastructure error reported by a port, e.g. a row that
    /// vanished between read and write.
    Port { code: ErrorCode, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn not_found_for_user(user_id: UserId) -> Self {
        SubscriptionError::NotFoundForUser(user_id)
    }

    pub fn user_not_found(user_id: UserId) -> Self {
        SubscriptionError::UserNotFound(user_id)
    }

    pub fn invalid_plan_type(plan: impl Into<String>) -> Self {
        SubscriptionError::InvalidPlanType(plan.into())
    }

    pub fn quota_exceeded(limit: i32) -> Self {
        SubscriptionError::QuotaExceeded { limit }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::NotFoundForUser(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::UserNotFound(_) => ErrorCode::UserNotFound,
            SubscriptionError::InvalidPlanType(_) => ErrorCode::InvalidPlanType,
            SubscriptionError::QuotaExceeded { .. } => ErrorCode::QuotaExceeded,
            SubscriptionError::Port { code, .. } => *code,
            SubscriptionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SubscriptionError::NotFoundForUser(user_id) => {
                format!("No subscription found for user: {}", user_id)
            }
            SubscriptionError::UserNotFound(user_id) => format!("User not found: {}", user_id),
            SubscriptionError::InvalidPlanType(plan) => {
                format!("Unsupported plan_type: '{}' (expected weekly or monthly)", plan)
            }
            SubscriptionError::QuotaExceeded { limit } => format!(
                "Daily free limit of {} generations reached. Try again tomorrow or upgrade to premium.",
                limit
            ),
            SubscriptionError::Port { message, .. } => message.clone(),
            SubscriptionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                SubscriptionError::Infrastructure(err.to_string())
            }
            code => SubscriptionError::Port {
                code,
                message: err.message,
            },
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            SubscriptionError::QuotaExceeded { limit } => {
                domain.with_detail("limit", limit.to_string())
            }
            SubscriptionError::InvalidPlanType(_) => domain.with_detail("field", "plan_type"),
            _ => domain,
        }
    }
}
