//! Fitted ridge regression model

use crate::error::{ArtifactError, PredictError};
use ndarray::{Array1, ArrayView2};
use serde::Deserialize;

/// On-disk form of a fitted ridge regressor
#[derive(Debug, Clone, Deserialize)]
pub struct RidgeArtifact {
    pub n_features_in: usize,
    #[serde(default)]
    pub feature_names_in: Option<Vec<String>>,
    pub coef: Vec<f64>,
    pub intercept: f64,
    /// Regularization strength picked during cross-validation
    #[serde(default)]
    pub alpha: Option<f64>,
}

/// Linear regressor with L2-regularized coefficients
#[derive(Debug, Clone)]
pub struct RidgeRegressor {
    coef: Array1<f64>,
    intercept: f64,
    alpha: Option<f64>,
    feature_names: Option<Vec<String>>,
}

impl RidgeRegressor {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self, ArtifactError> {
        Self::try_from(RidgeArtifact {
            n_features_in: coef.len(),
            feature_names_in: None,
            coef,
            intercept,
            alpha: None,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Predict one value per row of `x`
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictError> {
        if x.ncols() != self.n_features() {
            return Err(PredictError::FeatureCountMismatch {
                stage: "ridge model",
                expected: self.n_features(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(&self.coef) + self.intercept)
    }
}

impl TryFrom<RidgeArtifact> for RidgeRegressor {
    type Error = ArtifactError;

    fn try_from(artifact: RidgeArtifact) -> Result<Self, Self::Error> {
        let n = artifact.n_features_in;
        if artifact.coef.len() != n {
            return Err(ArtifactError::schema(
                "ridge model",
                format!(
                    "n_features_in is {n} but coef has {} entries",
                    artifact.coef.len()
                ),
            ));
        }
        if let Some(names) = &artifact.feature_names_in {
            if names.len() != n {
                return Err(ArtifactError::schema(
                    "ridge model",
                    format!("n_features_in is {n} but {} feature names given", names.len()),
                ));
            }
        }
        if artifact.coef.iter().any(|v| !v.is_finite()) || !artifact.intercept.is_finite() {
            return Err(ArtifactError::schema("ridge model", "non-finite parameter"));
        }

        Ok(Self {
            coef: Array1::from(artifact.coef),
            intercept: artifact.intercept,
            alpha: artifact.alpha,
            feature_names: artifact.feature_names_in,
        })
    }
}
