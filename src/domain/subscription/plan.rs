//! Paid plan definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::SubscriptionError;

/// A paid plan that grants premium status for a fixed term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    /// Seven days of premium.
    Weekly,
    /// Thirty days of premium.
    Monthly,
}

impl PlanType {
    /// Length of one term in days.
    pub fn term_days(&self) -> i64 {
        match self {
            PlanType::Weekly => 7,
            PlanType::Monthly => 30,
        }
    }

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Weekly => "weekly",
            PlanType::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = SubscriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(PlanType::Weekly),
            "monthly" => Ok(PlanType::Monthly),
            other => Err(SubscriptionError::invalid_plan_type(other)),
        }
    }
}
