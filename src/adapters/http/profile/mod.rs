//! HTTP adapter for conversation-partner profiles.
//!
//! - `POST /profiles` - Create a profile
//! - `GET /profiles?user_id=` - List a user's profiles, newest first
//! - `GET /profiles/:profile_id` - Get one profile
//! - `PUT /profiles/:profile_id` - Partially update a profile
//! - `DELETE /profiles/:profile_id` - Delete a profile

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::profile_routes;
