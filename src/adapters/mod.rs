//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM completion providers (OpenAI, mock)
//! - `ocr` - Screenshot text extraction (Naver Clova, mock)
//! - `postgres` - Repository implementations over `sqlx`
//! - `memory` - In-memory repositories for tests and local runs
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
pub mod memory;
pub mod ocr;
pub mod postgres;
