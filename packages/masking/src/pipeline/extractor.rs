//! Model-backed extraction.
//!
//! Prompt → generator → locate table text → parse rows. Locating and parsing
//! stay separate steps so each can be exercised on its own.

use tracing::{debug, warn};

use crate::error::{MaskingError, Result};
use crate::pipeline::locate::{locate_table, RegionStatus};
use crate::pipeline::prompts::build_masking_prompt;
use crate::pipeline::table::parse_table;
use crate::traits::generator::TextGenerator;
use crate::types::record::MaskingTable;

/// Extracts a masking table by asking a language model.
///
/// One request per call: no retry, no caching. The raw reply is dropped once
/// the table text has been located.
pub struct ModelExtractor<G> {
    generator: G,
}

impl<G: TextGenerator> ModelExtractor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Ask the model and return the raw table text it produced.
    ///
    /// `None` when the service failed or the located region is blank. Errors
    /// are logged here and never propagated.
    pub async fn fetch_table_text(&self, text: &str) -> Option<String> {
        match self.try_fetch_table_text(text).await {
            Ok(table_text) => Some(table_text),
            Err(e) => {
                warn!(error = %e, model = self.generator.model(), "Model extraction failed");
                None
            }
        }
    }

    /// Ask the model and parse its table into records.
    ///
    /// `None` when [`ModelExtractor::fetch_table_text`] yields nothing. A
    /// reply that located but parsed to zero rows comes back as an empty
    /// table; the caller decides whether that warrants the fallback.
    pub async fn extract(&self, text: &str) -> Option<MaskingTable> {
        let table_text = self.fetch_table_text(text).await?;
        let table = parse_table(&table_text);

        debug!(records = table.len(), "Parsed model table");

        Some(table)
    }

    /// Fallible core of [`ModelExtractor::fetch_table_text`].
    pub async fn try_fetch_table_text(&self, text: &str) -> Result<String> {
        let prompt = build_masking_prompt(text);
        let reply = self.generator.generate(&prompt).await?;

        // The reply echoes every sensitive original; only its size is logged.
        debug!(
            model = self.generator.model(),
            reply_len = reply.len(),
            "Model reply received"
        );

        let region = locate_table(&reply);
        match region.status {
            RegionStatus::Complete => {}
            RegionStatus::Unterminated => {
                debug!("Model table has no terminating blank line; using rest of reply");
            }
            RegionStatus::MissingHeader => {
                warn!("Model reply has no table header; parsing whole reply best-effort");
            }
        }

        if region.text.trim().is_empty() {
            return Err(MaskingError::EmptyResponse);
        }

        Ok(region.text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;
    use crate::types::record::MaskingRecord;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    const REPLY: &str = "Here is the table:\n\n\
        | Original Word | Masking Reason | Suggested Replacement |\n\
        |---|---|---|\n\
        | Elon Musk | Person's name | [NAME] |\n\
        | Austin | Location | [LOCATION] |\n\n\
        These words identify people and places.";

    #[tokio::test]
    async fn test_extract_parses_located_table() {
        let extractor = ModelExtractor::new(MockGenerator::new().with_response(REPLY));

        let table = extractor.extract("Elon Musk lives in Austin").await.unwrap();

        assert_eq!(
            table.records(),
            &[
                MaskingRecord::new("Elon Musk", "Person's name", "[NAME]"),
                MaskingRecord::new("Austin", "Location", "[LOCATION]"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_only_table_span() {
        let extractor = ModelExtractor::new(MockGenerator::new().with_response(REPLY));

        let table_text = extractor.fetch_table_text("x").await.unwrap();

        assert!(table_text.starts_with("| Original Word"));
        assert!(table_text.ends_with("| Austin | Location | [LOCATION] |"));
    }

    #[tokio::test]
    async fn test_prompt_embeds_text() {
        let generator = MockGenerator::new().with_response(REPLY);
        let extractor = ModelExtractor::new(generator);

        extractor.extract("Elon Musk lives in Austin").await;

        let prompts = extractor.generator().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("Text: \"Elon Musk lives in Austin\""));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_none() {
        let extractor =
            ModelExtractor::new(MockGenerator::new().with_failure("connection refused"));

        assert!(extractor.extract("anything").await.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_in_try_variant() {
        let extractor = ModelExtractor::new(MockGenerator::new().with_failure("503"));

        let err = extractor.try_fetch_table_text("anything").await.unwrap_err();

        assert!(matches!(err, MaskingError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_blank_reply_is_none() {
        let extractor = ModelExtractor::new(MockGenerator::new().with_response("   \n"));

        assert!(extractor.fetch_table_text("anything").await.is_none());
        assert!(matches!(
            extractor.try_fetch_table_text("anything").await,
            Err(MaskingError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_reply_without_header_is_best_effort() {
        // No header: the whole reply is parsed and its first two lines skipped.
        let reply = "Sure.\nSee below.\n| Tesla | Organization | [ORG] |";
        let extractor = ModelExtractor::new(MockGenerator::new().with_response(reply));

        let table = extractor.extract("Tesla").await.unwrap();

        assert_eq!(table.records(), &[MaskingRecord::new("Tesla", "Organization", "[ORG]")]);
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_reply_text_is_not_logged() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        let extractor = ModelExtractor::new(MockGenerator::new().with_response(REPLY));

        let table = tracing::subscriber::with_default(subscriber, || {
            tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap()
                .block_on(extractor.extract("Elon Musk lives in Austin"))
        });

        assert_eq!(table.unwrap().len(), 2);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("reply_len"));
        assert!(!output.contains("Elon Musk"));
        assert!(!output.contains("Austin"));
    }

    #[tokio::test]
    async fn test_prose_only_reply_is_empty_table() {
        let extractor = ModelExtractor::new(
            MockGenerator::new().with_response("There is nothing to mask in this text."),
        );

        let table = extractor.extract("hello").await.unwrap();

        assert!(table.is_empty());
    }
}
