//! Masking records and the ordered table that carries them.

use serde::{Deserialize, Serialize};

use crate::pipeline::render;

/// One detected sensitive span and the token that replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingRecord {
    /// Text to find, matched whole-word and case-sensitive
    pub original: String,

    /// Why the span is sensitive (e.g., "Person's name")
    pub reason: String,

    /// Token written in place of `original`, conventionally a bracketed tag
    pub replacement: String,
}

impl MaskingRecord {
    /// Create a record, trimming surrounding whitespace from every field.
    pub fn new(
        original: impl AsRef<str>,
        reason: impl AsRef<str>,
        replacement: impl AsRef<str>,
    ) -> Self {
        Self {
            original: original.as_ref().trim().to_string(),
            reason: reason.as_ref().trim().to_string(),
            replacement: replacement.as_ref().trim().to_string(),
        }
    }

    /// Both `original` and `replacement` are non-empty.
    ///
    /// An empty original would match at every word boundary, so unusable
    /// records are never emitted by the extractors and are skipped by the
    /// applier.
    pub fn is_usable(&self) -> bool {
        !self.original.trim().is_empty() && !self.replacement.trim().is_empty()
    }
}

/// Ordered sequence of masking records.
///
/// Order is application order: each record is applied to the text already
/// rewritten by the records before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaskingTable {
    records: Vec<MaskingRecord>,
}

impl MaskingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end of the application order.
    pub fn push(&mut self, record: MaskingRecord) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[MaskingRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MaskingRecord> {
        self.records.iter()
    }

    /// Records whose replacement equals `replacement` (e.g., "[EMAIL]").
    pub fn by_replacement(&self, replacement: &str) -> Vec<&MaskingRecord> {
        self.records
            .iter()
            .filter(|r| r.replacement == replacement)
            .collect()
    }

    /// Render as a three-column markdown table.
    pub fn to_markdown(&self) -> String {
        render::render_markdown(self)
    }

    /// Render as an HTML `<table>`.
    pub fn to_html(&self) -> String {
        render::render_html(self)
    }
}

impl From<Vec<MaskingRecord>> for MaskingTable {
    fn from(records: Vec<MaskingRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MaskingRecord> for MaskingTable {
    fn from_iter<I: IntoIterator<Item = MaskingRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MaskingTable {
    type Item = MaskingRecord;
    type IntoIter = std::vec::IntoIter<MaskingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a MaskingTable {
    type Item = &'a MaskingRecord;
    type IntoIter = std::slice::Iter<'a, MaskingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
