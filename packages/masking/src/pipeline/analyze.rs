//! Caller-facing analysis: pick a strategy, apply the table, render it.

use tracing::{info, warn};

use crate::pipeline::apply::apply_masking;
use crate::pipeline::extractor::ModelExtractor;
use crate::pipeline::fallback::extract_fallback;
use crate::traits::generator::TextGenerator;
use crate::types::{
    analysis::{AnalysisResult, ExtractionSource},
    config::AnalyzerConfig,
    record::MaskingTable,
};

/// Error reported when no strategy produced a table.
pub const ANALYSIS_FAILED: &str = "Failed to analyze text with LLM";

/// Runs the model-backed extractor, falls back to the pattern rules, and
/// masks the text.
///
/// Immutable after construction; share it behind an `Arc` across requests.
pub struct Analyzer<G> {
    extractor: ModelExtractor<G>,
    config: AnalyzerConfig,
}

impl<G: TextGenerator> Analyzer<G> {
    /// Create an analyzer with the default config (fallback enabled).
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, AnalyzerConfig::default())
    }

    pub fn with_config(generator: G, config: AnalyzerConfig) -> Self {
        Self {
            extractor: ModelExtractor::new(generator),
            config,
        }
    }

    pub fn extractor(&self) -> &ModelExtractor<G> {
        &self.extractor
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `text`.
    ///
    /// The fallback runs only after the model call has finished and produced
    /// nothing usable (failure or an empty table), never alongside it.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        if let Some(table) = self.extractor.extract(text).await {
            if !table.is_empty() {
                info!(records = table.len(), "Masking table from model");
                return finish(text, table, ExtractionSource::Model);
            }
        }

        if !self.config.fallback_enabled {
            warn!("Model extraction produced nothing and fallback is disabled");
            return AnalysisResult::failed(text, ANALYSIS_FAILED);
        }

        info!("Model extraction produced nothing; using fallback patterns");
        finish(text, extract_fallback(text), ExtractionSource::Fallback)
    }
}

/// Analyze `text` with the pattern rules only; no network access.
pub fn analyze_offline(text: &str) -> AnalysisResult {
    finish(text, extract_fallback(text), ExtractionSource::Fallback)
}

fn finish(text: &str, table: MaskingTable, source: ExtractionSource) -> AnalysisResult {
    let masked_text = apply_masking(text, &table);
    AnalysisResult::new(masked_text, table, source)
}
