//! HTTP adapter for subscription endpoints.
//!
//! - `POST /billing/subscribe` - Activate a weekly or monthly plan
//! - `GET /billing/status` - Current plan and today's quota

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::billing_routes;
