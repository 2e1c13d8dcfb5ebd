//! HTTP adapter for reply generation.
//!
//! - `POST /rizz/generate` - Replies for a pasted conversation
//! - `POST /rizz/generate-image` - Replies for a chat screenshot
//! - `GET /rizz/history?user_id=&limit=` - Recent generations

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::suggestion_routes;
