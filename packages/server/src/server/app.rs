//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use masking::{Analyzer, TextGenerator};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::routes::{analyze_handler, health_handler};

/// Shared application state
pub struct AppState<G> {
    pub analyzer: Arc<Analyzer<G>>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            analyzer: self.analyzer.clone(),
        }
    }
}

/// HTTP-level options that sit outside the masking pipeline.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// CORS allow-list; empty allows any origin.
    pub allowed_origins: Vec<String>,

    /// Whole-request timeout. The pipeline itself has none.
    pub request_timeout: Option<Duration>,
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            request_timeout: config.request_timeout,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
///
/// Generic over the text generator so the same routes serve the Ollama
/// backend in production and a mock in tests.
pub fn build_app<G>(analyzer: Arc<Analyzer<G>>, options: AppOptions) -> Router
where
    G: TextGenerator + 'static,
{
    let state = AppState { analyzer };

    let mut app = Router::new()
        .route("/analyze", post(analyze_handler::<G>))
        .route("/health", get(health_handler::<G>))
        .with_state(state);

    if let Some(timeout) = options.request_timeout {
        app = app.layer(TimeoutLayer::new(timeout));
    }

    // Middleware layers (applied in reverse order - last added runs first)
    app.layer(cors_layer(&options.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
