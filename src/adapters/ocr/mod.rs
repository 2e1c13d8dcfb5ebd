//! OCR Provider Adapters.
//!
//! - `NaverOcrProvider` - Naver Clova general OCR (V2 JSON API)
//! - `MockOcrProvider` - Queued text for tests and local runs

mod mock_provider;
mod naver_provider;

pub use mock_provider::MockOcrProvider;
pub use naver_provider::{NaverOcrConfig, NaverOcrProvider};
