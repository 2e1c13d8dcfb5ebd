//! Subscription handlers.
//!
//! ## Commands
//! - Consuming one unit of the daily quota (the usage gate)
//! - Activating a paid plan
//!
//! ## Queries
//! - Current plan and quota status

mod activate_subscription;
mod consume_usage;
mod expiry;
mod get_subscription_status;

// Commands
pub use activate_subscription::{ActivateSubscriptionCommand, ActivateSubscriptionHandler};
pub use consume_usage::{ConsumeUsageCommand, ConsumeUsageHandler};

pub(crate) use expiry::settle_expiry;

// Queries
pub use get_subscription_status::{
    GetSubscriptionStatusHandler, GetSubscriptionStatusQuery, SubscriptionStatus,
};
