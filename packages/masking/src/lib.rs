//! Sensitive-Text Masking Library
//!
//! Finds names, locations and identifiers in a block of text and replaces
//! them with placeholder tokens such as `[NAME]` or `[EMAIL]`.
//!
//! # Strategies
//!
//! - **Model-backed**: ask a language model for a markdown table of
//!   (original, reason, replacement) rows, locate the table in its reply,
//!   and parse the rows.
//! - **Pattern fallback**: a fixed, ordered list of regex rules, used when
//!   the model is unreachable or returns nothing usable. Never fails.
//!
//! Either table is applied with whole-word, case-sensitive substitution in
//! table order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use masking::{Analyzer, InferenceConfig};
//! use masking::ai::OllamaGenerator;
//!
//! let generator = OllamaGenerator::from_config(&InferenceConfig::default())?;
//! let analyzer = Analyzer::new(generator);
//!
//! let result = analyzer.analyze("My SSN is 123-45-6789.").await;
//! println!("{}", result.masked_text);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Records, tables, analysis results, configuration
//! - [`traits`] - The `TextGenerator` seam over the inference service
//! - [`pipeline`] - Prompt, locate, parse, fallback, apply, render, analyze
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "ollama")]
pub mod ai;

// Re-export core types at crate root
pub use error::{MaskingError, Result};
pub use traits::generator::TextGenerator;
pub use types::{
    analysis::{AnalysisResult, ExtractionSource},
    config::{AnalyzerConfig, InferenceConfig},
    record::{MaskingRecord, MaskingTable},
};

// Re-export pipeline components
pub use pipeline::{
    analyze_offline, apply_masking, build_masking_prompt, extract_fallback, fallback_rules,
    locate_table, parse_table, Analyzer, ModelExtractor, RegionStatus, TableRegion,
};

// Re-export testing utilities
pub use testing::MockGenerator;
