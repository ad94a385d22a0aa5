//! Locate the masking table inside a free-form model reply.
//!
//! Models wrap the requested table in prose ("Here is the table: ..."). The
//! table is found by its header marker and ends at the first blank line.
//! This is a pure function so varied reply shapes can be tested without an
//! inference service.

/// Header prefix that marks the start of the table.
pub const TABLE_HEADER_MARKER: &str = "| Original Word";

/// Blank line that ends the table.
const TABLE_TERMINATOR: &str = "\n\n";

/// How cleanly the table was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionStatus {
    /// Header found and terminated by a blank line
    Complete,
    /// Header found but no blank line after it; the rest of the reply is used
    Unterminated,
    /// No header; the whole reply is used as a best-effort table
    MissingHeader,
}

/// A slice of the model reply believed to hold the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRegion<'a> {
    pub text: &'a str,
    pub status: RegionStatus,
}

impl TableRegion<'_> {
    /// Whether the region was not cleanly delimited by header and blank line.
    pub fn is_degraded(&self) -> bool {
        self.status != RegionStatus::Complete
    }
}

/// Find the table region in `response`.
///
/// - Header and blank line present: the span between them, trimmed.
/// - Header without a blank line after it: from the header to the end.
/// - No header: the whole response, untouched.
pub fn locate_table(response: &str) -> TableRegion<'_> {
    let Some(start) = response.find(TABLE_HEADER_MARKER) else {
        return TableRegion {
            text: response,
            status: RegionStatus::MissingHeader,
        };
    };

    let rest = &response[start..];
    match rest.find(TABLE_TERMINATOR) {
        Some(end) => TableRegion {
            text: rest[..end].trim(),
            status: RegionStatus::Complete,
        },
        None => TableRegion {
            text: rest.trim_end(),
            status: RegionStatus::Unterminated,
        },
    }
}
