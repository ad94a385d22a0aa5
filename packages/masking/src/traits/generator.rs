//! Text generation trait for the model-backed extractor.
//!
//! The extractor only needs "prompt in, free-form text out". Keeping the
//! transport behind this trait lets tests substitute
//! [`crate::testing::MockGenerator`] for a live inference service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// A language model reachable through a single-shot completion call.
///
/// Implementations bind the endpoint and model identifier at construction
/// and must return the complete reply (no streaming).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `prompt`.
    ///
    /// Transport failures and non-success statuses are reported as
    /// [`crate::MaskingError::Upstream`].
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging and health reporting.
    fn model(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }

    fn model(&self) -> &str {
        (**self).model()
    }
}
