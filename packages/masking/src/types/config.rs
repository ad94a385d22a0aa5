//! Configuration types for inference and analysis.
//!
//! Both are plain values handed to constructors; nothing in this crate reads
//! the process environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default inference endpoint (a local Ollama daemon).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3:8b";

/// Where and how to reach the inference service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Full URL of the generate endpoint.
    pub endpoint: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Per-request timeout.
    ///
    /// Default: none. The request blocks until the service answers or the
    /// connection drops.
    #[serde(default)]
    pub timeout: Option<Duration>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl InferenceConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Configuration for the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Run the pattern rules when the model path yields nothing.
    ///
    /// When false, a failed model call is reported as an analysis error
    /// and the text is returned unchanged.
    ///
    /// Default: true.
    pub fallback_enabled: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fallback_enabled: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }
}
