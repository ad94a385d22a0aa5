// Main entry point for the masking API server

use std::sync::Arc;

use anyhow::{Context, Result};
use masking::ai::OllamaGenerator;
use masking::Analyzer;
use server_core::server::{build_app, AppOptions};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,masking=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting text masking API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        endpoint = %config.ollama_endpoint,
        model = %config.ollama_model,
        fallback = config.fallback_enabled,
        "Configuration loaded"
    );

    let generator = OllamaGenerator::from_config(&config.inference())
        .context("Failed to create inference client")?;
    let analyzer = Arc::new(Analyzer::with_config(generator, config.analyzer()));

    // Build application
    let app = build_app(analyzer, AppOptions::from(&config));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Analyze endpoint: http://localhost:{}/analyze", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
