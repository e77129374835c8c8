//! FWI Predictor - Main Entry Point
//!
//! Loads the fitted scaler and ridge model, then serves the prediction form.

use anyhow::Result;
use fwi_predictor::{config::AppConfig, models::inference::InferenceEngine, server};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!("fwi_predictor={}", config.logging.level))
    })?;
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!("Starting FWI predictor");

    // Both artifacts are required before serving
    let engine = InferenceEngine::from_config(&config).inspect_err(|e| {
        error!(error = ?e, "Failed to load artifacts");
    })?;

    server::run(&config.server, engine).await
}
