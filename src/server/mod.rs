//! HTTP front-end serving the prediction form

pub mod handlers;
pub mod multipart;
pub mod page;

use crate::config::ServerConfig;
use crate::models::inference::InferenceEngine;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;

pub use handlers::configure;

/// Bind the configured address and serve until shutdown
pub async fn run(config: &ServerConfig, engine: InferenceEngine) -> Result<()> {
    let engine = web::Data::new(engine);

    let mut server = HttpServer::new(move || App::new().app_data(engine.clone()).configure(configure));
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind(config.bind_addr())
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    info!(host = %config.host, port = config.port, "Listening");
    server.run().await.context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}
