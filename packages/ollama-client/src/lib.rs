//! Pure Ollama REST API client
//!
//! A minimal client for Ollama's `/api/generate` endpoint with no
//! domain-specific logic. Requests are always sent non-streaming, so each call
//! returns one complete reply.
//!
//! # Example
//!
//! ```rust,ignore
//! use ollama_client::{GenerateRequest, OllamaClient};
//!
//! let client = OllamaClient::from_env()?;
//!
//! let reply = client
//!     .generate(&GenerateRequest::new("llama3:8b", "Say hello"))
//!     .await?;
//!
//! println!("{}", reply.response);
//! ```

pub mod error;
pub mod types;

pub use error::{OllamaError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default endpoint of a local Ollama daemon.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Pure Ollama API client.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: Client,
    endpoint: String,
}

impl OllamaClient {
    /// Create a client that posts to the given generate endpoint.
    ///
    /// No request timeout is set; a hung daemon blocks the caller until the
    /// connection drops. Use [`OllamaClient::with_timeout`] to bound it.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create from environment variable `OLLAMA_ENDPOINT`, falling back to
    /// the local daemon.
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var("OLLAMA_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        if endpoint.trim().is_empty() {
            return Err(OllamaError::Config("OLLAMA_ENDPOINT is empty".into()));
        }
        Ok(Self::new(endpoint))
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OllamaError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single-shot text generation.
    ///
    /// Any non-2xx status is reported as [`OllamaError::Api`]; the body is
    /// included in the message for diagnostics.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %self.endpoint, "Ollama request failed");
                OllamaError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Ollama API error");
            return Err(OllamaError::Api(format!(
                "Ollama API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OllamaError::Parse(e.to_string()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            response_len = generated.response.len(),
            "Ollama generate"
        );

        Ok(generated)
    }
}
