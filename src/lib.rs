//! FWI Predictor Library
//!
//! Serves Fire Weather Index predictions from a fitted standard scaler and
//! ridge regression model behind a small HTML form.

pub mod config;
pub mod error;
pub mod feature_extractor;
pub mod models;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{ApiError, ArtifactError, FormError, PredictError};
pub use feature_extractor::FeatureExtractor;
pub use models::inference::InferenceEngine;
pub use types::{observation::Observation, prediction::Prediction};
