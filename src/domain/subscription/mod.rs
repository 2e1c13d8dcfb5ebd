//! Subscription domain module.
//!
//! Paid plans, expiry, and the free-tier daily quota.
//!
//! # Module Structure
//!
//! - `aggregate` - Subscription aggregate (expiry, usage gate, activation)
//! - `plan` - PlanType paid plans
//! - `usage` - quota constants and UsageSummary
//! - `errors` - SubscriptionError

mod aggregate;
mod errors;
mod plan;
mod usage;

pub use aggregate::Subscription;
pub use errors::SubscriptionError;
pub use plan::PlanType;
pub use usage::{UsageSummary, FREE_DAILY_LIMIT, UNLIMITED};
