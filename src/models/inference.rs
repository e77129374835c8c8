//! FWI inference engine: feature extraction, scaling and ridge prediction

use crate::config::AppConfig;
use crate::error::{ArtifactError, PredictError};
use crate::feature_extractor::FeatureExtractor;
use crate::models::loader::{check_schema, LoadedArtifacts, ModelLoader};
use crate::models::ridge::RidgeRegressor;
use crate::models::scaler::StandardScaler;
use crate::types::observation::Observation;
use crate::types::prediction::Prediction;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Immutable inference state shared by every request handler
pub struct InferenceEngine {
    extractor: FeatureExtractor,
    scaler: StandardScaler,
    model: RidgeRegressor,
}

impl InferenceEngine {
    /// Create an engine from already-loaded artifacts
    pub fn new(scaler: StandardScaler, model: RidgeRegressor) -> Result<Self, ArtifactError> {
        check_schema(&scaler, &model)?;
        Ok(Self {
            extractor: FeatureExtractor::new(),
            scaler,
            model,
        })
    }

    /// Load the artifacts named by the configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let loader = ModelLoader::from_config(&config.models);
        let LoadedArtifacts { scaler, model } = loader.load_all().with_context(|| {
            format!("Failed to load artifacts from {}", loader.models_dir().display())
        })?;

        let engine = Self::new(scaler, model)?;
        info!(
            features = engine.feature_count(),
            alpha = ?engine.model.alpha(),
            "Inference engine initialized"
        );
        Ok(engine)
    }

    pub fn feature_count(&self) -> usize {
        self.extractor.feature_count()
    }

    /// Scale the observation and run the ridge model on it
    pub fn predict(&self, obs: &Observation) -> Result<Prediction, PredictError> {
        let features = self.extractor.extract(obs);
        let scaled = self.scaler.transform(features.view())?;
        let output = self.model.predict(scaled.view())?;

        let fwi = output.first().copied().ok_or(PredictError::EmptyOutput)?;
        if !fwi.is_finite() {
            return Err(PredictError::NonFinite(fwi));
        }

        debug!(fwi = fwi, "Prediction complete");
        Ok(Prediction::new(fwi))
    }
}
