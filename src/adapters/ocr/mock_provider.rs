//! Mock OCR provider for tests and local runs without vendor credentials.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{OcrError, OcrImage, OcrProvider};

/// Text returned once the queue is empty and no fallback was set.
const DEFAULT_TEXT: &str = "상대: 주말에 뭐 했어?\n나: 집에서 쉬었어";

/// Returns queued results in order, then a fixed fallback text.
#[derive(Debug, Clone)]
pub struct MockOcrProvider {
    results: Arc<Mutex<VecDeque<Result<String, String>>>>,
    fallback: String,
    calls: Arc<Mutex<usize>>,
}

impl Default for MockOcrProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockOcrProvider {
    /// Creates a mock with the built-in fallback text.
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            fallback: DEFAULT_TEXT.to_string(),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Replaces the fallback text.
    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = text.into();
        self
    }

    /// Queues a successful extraction.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.results.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queues a failing extraction.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.results.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Number of extractions requested so far.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl OcrProvider for MockOcrProvider {
    async fn extract_text(&self, _image: &OcrImage) -> Result<String, OcrError> {
        *self.calls.lock().unwrap() += 1;
        match self.results.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(OcrError::Request(message)),
            None => Ok(self.fallback.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ImageFormat;

    fn image() -> OcrImage {
        OcrImage::new(vec![1, 2, 3], Some(ImageFormat::Png), 1024).unwrap()
    }

    #[tokio::test]
    async fn returns_queue_then_fallback() {
        let ocr = MockOcrProvider::new()
            .with_fallback("fallback")
            .with_text("first")
            .with_failure("boom");

        assert_eq!(ocr.extract_text(&image()).await.unwrap(), "first");
        assert!(matches!(
            ocr.extract_text(&image()).await,
            Err(OcrError::Request(_))
        ));
        assert_eq!(ocr.extract_text(&image()).await.unwrap(), "fallback");
        assert_eq!(ocr.call_count(), 3);
    }
}
