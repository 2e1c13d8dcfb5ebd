//! Request/response DTOs for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SubscriptionStatus;
use crate::domain::foundation::Timestamp;
use crate::domain::subscription::UsageSummary;

/// Request body for `POST /billing/subscribe`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeRequest {
    pub user_id: String,
    /// `weekly` or `monthly`.
    pub plan_type: String,
}

/// Query string for `GET /billing/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub user_id: String,
}

/// Quota snapshot. `-1` in both numbers means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageResponse {
    pub remaining: i32,
    pub limit: i32,
    pub is_premium: bool,
}

impl From<UsageSummary> for UsageResponse {
    fn from(usage: UsageSummary) -> Self {
        Self {
            remaining: usage.remaining,
            limit: usage.limit,
            is_premium: usage.is_premium,
        }
    }
}

/// Response for both subscription endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionStatusResponse {
    pub user_id: String,
    pub is_premium: bool,
    pub plan_type: Option<String>,
    pub expires_at: Option<Timestamp>,
    pub usage: UsageResponse,
}

impl From<SubscriptionStatus> for SubscriptionStatusResponse {
    fn from(status: SubscriptionStatus) -> Self {
        let sub = status.subscription;
        Self {
            user_id: sub.user_id.to_string(),
            is_premium: sub.is_premium,
            plan_type: sub.plan_type.map(|p| p.as_str().to_string()),
            expires_at: sub.expires_at,
            usage: status.usage.into(),
        }
    }
}
