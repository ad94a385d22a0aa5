use axum::{extract::State, Json};
use masking::TextGenerator;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    model: String,
}

/// Health check endpoint
///
/// Reports the configured model. Does not contact the inference service,
/// since an unreachable model still leaves the fallback path working.
pub async fn health_handler<G>(State(state): State<AppState<G>>) -> Json<HealthResponse>
where
    G: TextGenerator + 'static,
{
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.analyzer.extractor().generator().model().to_string(),
    })
}
