//! Ollama API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Generate
// =============================================================================

/// Text generation request for `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model to use (e.g., "llama3:8b")
    pub model: String,

    /// Full prompt text
    pub prompt: String,

    /// Incremental (token-by-token) response when true
    pub stream: bool,
}

impl GenerateRequest {
    /// Create a non-streaming request, so the reply arrives as one JSON object.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Generation response.
///
/// Only `response` matters to callers; the remaining fields are timing and
/// bookkeeping metadata that Ollama includes on the final message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Model that produced the reply
    #[serde(default)]
    pub model: Option<String>,

    /// Free-form generated text
    #[serde(default)]
    pub response: String,

    /// Whether generation finished
    #[serde(default)]
    pub done: bool,

    /// Total time spent, in nanoseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u64>,

    /// Tokens in the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u32>,

    /// Tokens in the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u32>,
}
