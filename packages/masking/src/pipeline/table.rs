//! Parse a located markdown table into masking records.

use crate::types::record::{MaskingRecord, MaskingTable};

/// Lines skipped before data rows: the header and the separator.
const PREAMBLE_LINES: usize = 2;

/// Minimum `|`-split segments for a data row: the empty segment before the
/// first pipe plus three columns.
const MIN_SEGMENTS: usize = 4;

/// Parse table text into records.
///
/// The first two lines are always skipped, whatever they contain; this
/// relies on the model following the requested format. Remaining lines
/// without a pipe, with fewer than four segments, or with a blank original
/// or replacement are skipped silently.
pub fn parse_table(table_text: &str) -> MaskingTable {
    table_text
        .lines()
        .skip(PREAMBLE_LINES)
        .filter(|line| line.contains('|'))
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<MaskingRecord> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < MIN_SEGMENTS {
        return None;
    }

    let record = MaskingRecord::new(segments[1], segments[2], segments[3]);
    record.is_usable().then_some(record)
}
