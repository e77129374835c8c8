//! Fitted artifact loader

use crate::config::ModelsConfig;
use crate::error::ArtifactError;
use crate::models::ridge::{RidgeArtifact, RidgeRegressor};
use crate::models::scaler::{ScalerArtifact, StandardScaler};
use crate::types::observation::{FEATURE_COUNT, FEATURE_NAMES};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default scaler artifact file name
pub const SCALER_FILE: &str = "scaler.json";
/// Default ridge model artifact file name
pub const MODEL_FILE: &str = "ridgecv.json";

/// Scaler and model that passed the schema check together
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub scaler: StandardScaler,
    pub model: RidgeRegressor,
}

/// Loader for the fitted scaler and ridge model
#[derive(Debug, Clone)]
pub struct ModelLoader {
    models_dir: PathBuf,
    scaler_file: String,
    model_file: String,
}

impl ModelLoader {
    /// Create a loader reading the default file names from `models_dir`
    pub fn new<P: AsRef<Path>>(models_dir: P) -> Self {
        Self {
            models_dir: models_dir.as_ref().to_path_buf(),
            scaler_file: SCALER_FILE.to_string(),
            model_file: MODEL_FILE.to_string(),
        }
    }

    /// Create a loader from the `[models]` configuration section
    pub fn from_config(config: &ModelsConfig) -> Self {
        Self {
            models_dir: PathBuf::from(&config.models_dir),
            scaler_file: config.scaler_file.clone(),
            model_file: config.model_file.clone(),
        }
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.models_dir.join(&self.scaler_file)
    }

    pub fn model_path(&self) -> PathBuf {
        self.models_dir.join(&self.model_file)
    }

    /// Load the fitted scaler
    pub fn load_scaler(&self) -> Result<StandardScaler, ArtifactError> {
        let path = self.scaler_path();
        let artifact: ScalerArtifact = read_artifact(&path)?;
        let scaler = StandardScaler::try_from(artifact)?;

        info!(
            path = %path.display(),
            features = scaler.n_features(),
            "Scaler loaded"
        );
        Ok(scaler)
    }

    /// Load the fitted ridge model
    pub fn load_model(&self) -> Result<RidgeRegressor, ArtifactError> {
        let path = self.model_path();
        let artifact: RidgeArtifact = read_artifact(&path)?;
        let model = RidgeRegressor::try_from(artifact)?;

        info!(
            path = %path.display(),
            features = model.n_features(),
            alpha = ?model.alpha(),
            "Ridge model loaded"
        );
        Ok(model)
    }

    /// Load both artifacts and check them against the input schema
    pub fn load_all(&self) -> Result<LoadedArtifacts, ArtifactError> {
        let scaler = self.load_scaler()?;
        let model = self.load_model()?;
        check_schema(&scaler, &model)?;

        info!(
            models_dir = %self.models_dir.display(),
            "Artifacts match the {} input fields",
            FEATURE_COUNT
        );
        Ok(LoadedArtifacts { scaler, model })
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new("models")
    }
}

/// Check that both artifacts were fitted on the form's feature layout.
///
/// Feature names are compared only when the artifact records them.
pub fn check_schema(scaler: &StandardScaler, model: &RidgeRegressor) -> Result<(), ArtifactError> {
    check_layout("scaler", scaler.n_features(), scaler.feature_names())?;
    check_layout("ridge model", model.n_features(), model.feature_names())
}

fn check_layout(
    artifact: &'static str,
    n_features: usize,
    names: Option<&[String]>,
) -> Result<(), ArtifactError> {
    if n_features != FEATURE_COUNT {
        return Err(ArtifactError::schema(
            artifact,
            format!("expected {FEATURE_COUNT} features, found {n_features}"),
        ));
    }
    if let Some(names) = names {
        if names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ArtifactError::schema(
                artifact,
                format!("feature names {names:?} do not match {FEATURE_NAMES:?}"),
            ));
        }
    }
    Ok(())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
