//! Ollama implementation of the TextGenerator trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use masking::ai::OllamaGenerator;
//! use masking::{Analyzer, InferenceConfig};
//!
//! let generator = OllamaGenerator::from_config(&InferenceConfig::default())?;
//! let result = Analyzer::new(generator).analyze("John Doe lives in Austin").await;
//! ```

use async_trait::async_trait;
use ollama_client::{GenerateRequest, OllamaClient};

use crate::error::{MaskingError, Result};
use crate::traits::generator::TextGenerator;
use crate::types::config::InferenceConfig;

/// Ollama-backed text generator bound to one model.
#[derive(Clone)]
pub struct OllamaGenerator {
    client: OllamaClient,
    model: String,
}

impl OllamaGenerator {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build the client from an explicit config.
    pub fn from_config(config: &InferenceConfig) -> Result<Self> {
        if config.model.trim().is_empty() {
            return Err(MaskingError::Config("model identifier is empty".into()));
        }

        let mut client = OllamaClient::new(&config.endpoint);
        if let Some(timeout) = config.timeout {
            client = client
                .with_timeout(timeout)
                .map_err(|e| MaskingError::Config(e.to_string()))?;
        }

        Ok(Self::new(client, &config.model))
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest::new(&self.model, prompt);

        let reply = self
            .client
            .generate(&request)
            .await
            .map_err(|e| MaskingError::Upstream(Box::new(e)))?;

        Ok(reply.response)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
