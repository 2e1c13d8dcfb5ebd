//! Mock AI Provider - Configurable mock for testing and local development.
//!
//! Queues canned responses or errors, counts calls and keeps the most recent
//! requests for inspection.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("1. Hello\n2. Hi there")
//!     .with_error(MockError::RateLimited { retry_after_secs: 30 });
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Content returned once the queue is empty.
pub const DEFAULT_MOCK_CONTENT: &str =
    "오늘 하루 어땠어?\n주말에 뭐 하고 지냈어?\n다음에 같이 커피 한잔 할래?";

/// Requests retained by `get_calls`; older ones are dropped.
pub const MAX_RECORDED_CALLS: usize = 64;

/// A queued response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Successful completion.
    Success {
        /// Response content.
        content: String,
        /// Token usage.
        usage: TokenUsage,
    },
    /// Error response.
    Error(MockError),
}

/// Errors the mock can be told to produce.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Rate limited error.
    RateLimited { retry_after_secs: u32 },
    /// Service unavailable.
    Unavailable { message: String },
    /// Authentication failed.
    AuthenticationFailed,
    /// Network error.
    Network { message: String },
    /// Timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

/// Mock AI provider.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    calls: Arc<Mutex<VecDeque<CompletionRequest>>>,
    call_count: Arc<AtomicUsize>,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a mock with an empty queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-standard", "mock-premium"),
            calls: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(100, 50),
        });
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The last `MAX_RECORDED_CALLS` requests, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().iter().cloned().collect()
    }

    fn record(&self, request: CompletionRequest) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let mut calls = self.calls.lock().unwrap();
        if calls.len() == MAX_RECORDED_CALLS {
            calls.pop_front();
        }
        calls.push_back(request);
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: DEFAULT_MOCK_CONTENT.to_string(),
                usage: TokenUsage::new(100, 50),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let model = self.info.model_for(request.model_tier).to_string();
        self.record(request);

        match self.next_response() {
            MockResponse::Success { content, usage } => Ok(CompletionResponse {
                content,
                usage,
                model,
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
