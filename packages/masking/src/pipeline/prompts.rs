//! LLM prompt for masking-table extraction.

/// Column headings the model is asked to use, in order.
pub const TABLE_COLUMNS: [&str; 3] = ["Original Word", "Masking Reason", "Suggested Replacement"];

/// Prompt asking the model for a markdown table of words to mask.
///
/// `{text}` is replaced with the caller's text, quote-escaped.
pub const MASKING_PROMPT: &str = r#"Analyze the following text and extract words that should be masked (e.g., names, locations, sensitive info).
Format the output as a markdown table with columns:
- "Original Word"
- "Masking Reason"
- "Suggested Replacement"

Example Output:
| Original Word | Masking Reason | Suggested Replacement |
|---------------|----------------|-----------------------|
| John Doe      | Person's name  | [NAME]                |
| New York      | Location       | [LOCATION]            |

Text: "{text}""#;

/// Build the extraction prompt for `text`.
///
/// Deterministic: the same text always yields the same prompt. Backslashes
/// and double quotes in `text` are escaped so the embedded text cannot close
/// its delimiting quotes early; everything else is embedded verbatim.
pub fn build_masking_prompt(text: &str) -> String {
    MASKING_PROMPT.replace("{text}", &escape_quoted(text))
}

fn escape_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str(r#"\""#),
            other => escaped.push(other),
        }
    }
    escaped
}
