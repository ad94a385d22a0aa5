use anyhow::{Context, Result};
use dotenvy::dotenv;
use masking::types::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use masking::{AnalyzerConfig, InferenceConfig};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub ollama_endpoint: String,
    pub ollama_model: String,
    pub ollama_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub fallback_enabled: bool,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            ollama_endpoint: lookup("OLLAMA_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            ollama_model: lookup("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ollama_timeout: parse_secs(lookup("OLLAMA_TIMEOUT_SECS"))
                .context("OLLAMA_TIMEOUT_SECS must be a whole number of seconds")?,
            request_timeout: parse_secs(lookup("REQUEST_TIMEOUT_SECS"))
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            fallback_enabled: lookup("MASKING_FALLBACK_ENABLED")
                .unwrap_or_else(|| "true".to_string())
                .trim()
                .parse::<bool>()
                .context("MASKING_FALLBACK_ENABLED must be true or false")?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }

    pub fn inference(&self) -> InferenceConfig {
        let config = InferenceConfig::new()
            .with_endpoint(&self.ollama_endpoint)
            .with_model(&self.ollama_model);

        match self.ollama_timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }

    pub fn analyzer(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().with_fallback(self.fallback_enabled)
    }
}

fn parse_secs(value: Option<String>) -> Result<Option<Duration>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(Duration::from_secs(raw.parse::<u64>()?))),
    }
}
