use axum::{extract::State, Json};
use masking::{AnalysisResult, TextGenerator};
use serde::Deserialize;

use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing text is treated as empty.
    #[serde(default)]
    pub text: String,
}

/// Mask the submitted text.
///
/// Always answers 200: when neither the model nor the fallback produced a
/// table, the result carries the original text and an `error` field.
pub async fn analyze_handler<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResult>
where
    G: TextGenerator + 'static,
{
    tracing::debug!(chars = request.text.chars().count(), "Analyze request");

    let result = state.analyzer.analyze(&request.text).await;

    tracing::info!(
        source = ?result.source,
        records = result.table.len(),
        "Analyze request complete"
    );

    Json(result)
}
