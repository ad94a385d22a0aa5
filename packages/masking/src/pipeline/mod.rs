//! Masking pipeline.
//!
//! The pipeline orchestrates:
//! - Prompt construction for the language model
//! - Locating the table in the model's free-form reply
//! - Parsing table rows into records
//! - Pattern-based fallback extraction
//! - Whole-word substitution of the records onto the text
//! - Markdown/HTML rendering of the table

pub mod analyze;
pub mod apply;
pub mod extractor;
pub mod fallback;
pub mod locate;
pub mod prompts;
pub mod render;
pub mod table;

pub use analyze::{analyze_offline, Analyzer, ANALYSIS_FAILED};
pub use apply::{apply_masking, whole_word_regex};
pub use extractor::ModelExtractor;
pub use fallback::{extract_fallback, fallback_rules, FallbackRule};
pub use locate::{locate_table, RegionStatus, TableRegion, TABLE_HEADER_MARKER};
pub use prompts::{build_masking_prompt, MASKING_PROMPT, TABLE_COLUMNS};
pub use render::{render_html, render_markdown};
pub use table::parse_table;
