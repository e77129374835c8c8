//! Configuration management for the FWI predictor

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub models: ModelsConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind (all interfaces by default)
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Number of HTTP workers (defaults to the number of physical cores)
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// Socket address the server binds to
    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: None,
        }
    }
}

/// Fitted artifact locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Directory containing the artifact files; a relative path is resolved
    /// against the working directory of the process
    pub models_dir: String,
    /// Scaler artifact file name
    pub scaler_file: String,
    /// Ridge model artifact file name
    pub model_file: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            models_dir: "models".to_string(),
            scaler_file: "scaler.json".to_string(),
            model_file: "ridgecv.json".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/config.toml`, falling back to defaults
    /// when the file does not exist
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path; missing keys keep their defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
