//! Pattern-based fallback extraction.
//!
//! Used when the language model is unreachable or returns nothing usable.
//! Runs a fixed, ordered list of regex rules over the full text and records
//! every match. It never fails and never touches the network.
//!
//! Rules 1 and 2 overlap: every two-word name also matches the capitalized
//! sequence rule, so the same span is reported as both "Person's name" and
//! "Location". Duplicates are kept; the applier's first-match-wins order
//! decides which token ends up in the text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::types::record::{MaskingRecord, MaskingTable};

/// A single fallback rule: every match of `pattern` becomes one record.
#[derive(Debug)]
pub struct FallbackRule {
    pub pattern: Regex,
    pub reason: &'static str,
    pub replacement: &'static str,
}

impl FallbackRule {
    fn new(pattern: &str, reason: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            reason,
            replacement,
        }
    }
}

lazy_static! {
    static ref FALLBACK_RULES: Vec<FallbackRule> = vec![
        // Two capitalized words - "John Doe"
        FallbackRule::new(r"\b[A-Z][a-z]+ [A-Z][a-z]+\b", "Person's name", "[NAME]"),
        // One or more capitalized words - "Austin", "New York"
        FallbackRule::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*\b", "Location", "[LOCATION]"),
        // Dotted quad, no octet range check
        FallbackRule::new(
            r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b",
            "IP address",
            "[IP_ADDRESS]",
        ),
        // Email - the TLD class admits '|' as well as letters
        FallbackRule::new(
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
            "Email address",
            "[EMAIL]",
        ),
        // Social Security Number - XXX-XX-XXXX
        FallbackRule::new(r"\b\d{3}-\d{2}-\d{4}\b", "SSN", "[SSN]"),
        // Credit card - 16 bare digits
        FallbackRule::new(r"\b\d{16}\b", "Credit card", "[CREDIT_CARD]"),
        // Phone - 10 bare digits
        FallbackRule::new(r"\b\d{10}\b", "Phone number", "[PHONE]"),
    ];
}

/// The fallback rules in evaluation order.
pub fn fallback_rules() -> &'static [FallbackRule] {
    &FALLBACK_RULES
}

/// Build a masking table from the fixed pattern rules.
///
/// Records are grouped by rule, in rule order, and by position within each
/// rule. No deduplication or overlap resolution is done here.
pub fn extract_fallback(text: &str) -> MaskingTable {
    let mut table = MaskingTable::new();

    for rule in fallback_rules() {
        for mat in rule.pattern.find_iter(text) {
            table.push(MaskingRecord::new(mat.as_str(), rule.reason, rule.replacement));
        }
    }

    debug!(records = table.len(), "Fallback extraction complete");

    table
}
