//! Fitted standard scaler

use crate::error::{ArtifactError, PredictError};
use ndarray::{Array1, Array2, ArrayView2};
use serde::Deserialize;

/// On-disk form of a fitted standard scaler
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub n_features_in: usize,
    #[serde(default)]
    pub feature_names_in: Option<Vec<String>>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default = "default_true")]
    pub with_mean: bool,
    #[serde(default = "default_true")]
    pub with_std: bool,
}

fn default_true() -> bool {
    true
}

/// Standardizes features by removing the fitted mean and dividing by the
/// fitted scale
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
    with_mean: bool,
    with_std: bool,
    feature_names: Option<Vec<String>>,
}

impl StandardScaler {
    /// Build a scaler from mean and scale vectors, centering and scaling enabled
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, ArtifactError> {
        Self::try_from(ScalerArtifact {
            n_features_in: mean.len(),
            feature_names_in: None,
            mean,
            scale,
            with_mean: true,
            with_std: true,
        })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Scale every row of `x`; the output has the same shape as the input
    pub fn transform(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, PredictError> {
        if x.ncols() != self.n_features() {
            return Err(PredictError::FeatureCountMismatch {
                stage: "scaler",
                expected: self.n_features(),
                got: x.ncols(),
            });
        }

        let mut scaled = x.to_owned();
        if self.with_mean {
            scaled -= &self.mean;
        }
        if self.with_std {
            scaled /= &self.scale;
        }
        Ok(scaled)
    }
}

impl TryFrom<ScalerArtifact> for StandardScaler {
    type Error = ArtifactError;

    fn try_from(artifact: ScalerArtifact) -> Result<Self, Self::Error> {
        let n = artifact.n_features_in;
        if artifact.mean.len() != n || artifact.scale.len() != n {
            return Err(ArtifactError::schema(
                "scaler",
                format!(
                    "n_features_in is {n} but mean has {} and scale has {} entries",
                    artifact.mean.len(),
                    artifact.scale.len()
                ),
            ));
        }
        if let Some(names) = &artifact.feature_names_in {
            if names.len() != n {
                return Err(ArtifactError::schema(
                    "scaler",
                    format!("n_features_in is {n} but {} feature names given", names.len()),
                ));
            }
        }
        if artifact.mean.iter().chain(&artifact.scale).any(|v| !v.is_finite()) {
            return Err(ArtifactError::schema("scaler", "non-finite parameter"));
        }
        if artifact.scale.iter().any(|&s| s == 0.0) {
            return Err(ArtifactError::schema("scaler", "zero entry in scale"));
        }

        Ok(Self {
            mean: Array1::from(artifact.mean),
            scale: Array1::from(artifact.scale),
            with_mean: artifact.with_mean,
            with_std: artifact.with_std,
            feature_names: artifact.feature_names_in,
        })
    }
}
