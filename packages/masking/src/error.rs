//! Typed errors for the masking library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while producing a masking table.
///
/// None of these reach callers of [`crate::ModelExtractor::extract`]; the
/// extractor logs them and reports `None` so the caller can fall back.
#[derive(Debug, Error)]
pub enum MaskingError {
    /// Inference service unreachable, returned a non-success status, or sent
    /// an undecodable body
    #[error("inference service error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Inference service answered but no table text could be located
    #[error("inference service returned no table")]
    EmptyResponse,

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// A record produced a pattern the regex engine rejected
    #[error("invalid masking pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for masking operations.
pub type Result<T> = std::result::Result<T, MaskingError>;
