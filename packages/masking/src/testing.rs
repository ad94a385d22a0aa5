//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the masking library
//! without making real inference calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{MaskingError, Result};
use crate::traits::generator::TextGenerator;

/// A scripted reply.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// A mock text generator for testing.
///
/// Replies are consumed in the order they were queued; the last queued reply
/// repeats once the queue would otherwise run dry. With nothing queued every
/// call fails, like an unreachable service.
#[derive(Clone, Default)]
pub struct MockGenerator {
    /// Queued replies
    replies: Arc<RwLock<VecDeque<MockReply>>>,

    /// Prompts received, for assertions
    prompts: Arc<RwLock<Vec<String>>>,

    /// Model name reported by `model()`
    model: String,
}

impl MockGenerator {
    /// Create a mock with no replies queued.
    pub fn new() -> Self {
        Self {
            model: "mock-model".to_string(),
            ..Default::default()
        }
    }

    /// Queue a successful reply.
    pub fn with_response(self, reply: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push_back(MockReply::Text(reply.into()));
        self
    }

    /// Queue an upstream failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.replies
            .write()
            .unwrap()
            .push_back(MockReply::Failure(message.into()));
        self
    }

    /// Set the reported model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }

    fn next_reply(&self) -> Option<MockReply> {
        let mut replies = self.replies.write().unwrap();
        if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        match self.next_reply() {
            Some(MockReply::Text(reply)) => Ok(reply),
            Some(MockReply::Failure(message)) => Err(MaskingError::Upstream(message.into())),
            None => Err(MaskingError::Upstream("no mock reply configured".into())),
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order_then_repeat_last() {
        let mock = MockGenerator::new().with_response("one").with_response("two");

        assert_eq!(mock.generate("a").await.unwrap(), "one");
        assert_eq!(mock.generate("b").await.unwrap(), "two");
        assert_eq!(mock.generate("c").await.unwrap(), "two");
        assert_eq!(mock.prompts(), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_unconfigured_mock_fails() {
        let mock = MockGenerator::new();

        assert!(mock.generate("a").await.is_err());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockGenerator::new().with_response("ok");
        let clone = mock.clone();

        clone.generate("through clone").await.unwrap();

        assert_eq!(mock.call_count(), 1);
    }
}
