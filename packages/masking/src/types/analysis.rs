//! Caller-facing analysis result.

use serde::{Deserialize, Serialize};

use super::record::MaskingTable;

/// Which extraction strategy produced the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// Table parsed from the language model's reply
    Model,
    /// Table produced by the fixed pattern rules
    Fallback,
    /// Nothing produced a table
    None,
}

/// Result of one analysis request.
///
/// `table_markdown` and `table_html` are derived from `table`; they are
/// carried only so callers don't have to render it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub masked_text: String,
    pub table: MaskingTable,
    pub table_markdown: String,
    pub table_html: String,
    pub source: ExtractionSource,

    /// Set only when every strategy failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// Build a result from a table, rendering both representations.
    pub fn new(masked_text: String, table: MaskingTable, source: ExtractionSource) -> Self {
        let table_markdown = table.to_markdown();
        let table_html = table.to_html();
        Self {
            masked_text,
            table,
            table_markdown,
            table_html,
            source,
            error: None,
        }
    }

    /// The original text unchanged, an empty table, and an error indicator.
    pub fn failed(text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            masked_text: text.into(),
            table: MaskingTable::new(),
            table_markdown: String::new(),
            table_html: String::new(),
            source: ExtractionSource::None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
