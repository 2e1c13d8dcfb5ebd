//! Daily usage quota values.

use serde::{Deserialize, Serialize};

/// Generations a free-tier user may run per UTC calendar day.
pub const FREE_DAILY_LIMIT: i32 = 5;

/// Sentinel reported for both `remaining` and `limit` when usage is unbounded.
pub const UNLIMITED: i32 = -1;

/// Snapshot of a user's quota after (or without) consuming a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub remaining: i32,
    pub limit: i32,
    pub is_premium: bool,
}

impl UsageSummary {
    /// Summary for a premium subscription.
    pub fn unlimited() -> Self {
        Self {
            remaining: UNLIMITED,
            limit: UNLIMITED,
            is_premium: true,
        }
    }

    /// Summary for a free-tier subscription that has used `used` units today.
    pub fn free(used: i32) -> Self {
        Self {
            remaining: (FREE_DAILY_LIMIT - used).max(0),
            limit: FREE_DAILY_LIMIT,
            is_premium: false,
        }
    }
}
