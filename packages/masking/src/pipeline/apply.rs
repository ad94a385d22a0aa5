//! Apply a masking table to text.

use regex::{NoExpand, Regex};
use tracing::warn;

use crate::error::Result;
use crate::types::record::MaskingTable;

/// Compile a case-sensitive, whole-word pattern for `original`.
///
/// Multi-word originals ("New York") match through the boundary anchors at
/// both ends of the phrase.
pub fn whole_word_regex(original: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"\b{}\b", regex::escape(original)))?)
}

/// Replace every whole-word occurrence of each record's original with its
/// replacement, in table order.
///
/// Each record sees the text as rewritten by the records before it, so an
/// earlier replacement can hide a later record's original. Replacements are
/// inserted literally (`$1` is not expanded). Unusable records and records
/// whose pattern fails to compile are skipped.
pub fn apply_masking(text: &str, table: &MaskingTable) -> String {
    if table.is_empty() {
        return text.to_string();
    }

    let mut masked = text.to_string();

    for record in table {
        if !record.is_usable() {
            continue;
        }

        match whole_word_regex(&record.original) {
            Ok(pattern) => {
                masked = pattern
                    .replace_all(&masked, NoExpand(&record.replacement))
                    .into_owned();
            }
            Err(e) => {
                warn!(
                    error = %e,
                    original_len = record.original.len(),
                    "Skipping masking record with unusable pattern"
                );
            }
        }
    }

    masked
}
