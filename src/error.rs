//! Error types for artifact loading, form validation and inference

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use std::path::PathBuf;

/// Errors raised while reading or validating a fitted artifact
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{artifact}: schema check failed: {reason}")]
    Schema {
        artifact: &'static str,
        reason: String,
    },
}

impl ArtifactError {
    pub(crate) fn schema(artifact: &'static str, reason: impl Into<String>) -> Self {
        Self::Schema {
            artifact,
            reason: reason.into(),
        }
    }
}

/// Errors raised while turning submitted form fields into an observation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not a finite number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Errors raised by the scaler or the regressor at prediction time
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("{stage} expects {expected} features, got {got}")]
    FeatureCountMismatch {
        stage: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("model produced no output")]
    EmptyOutput,

    #[error("model produced a non-finite value: {0}")]
    NonFinite(f64),
}

/// Request-level error returned by the HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid form input: {0}")]
    Form(#[from] FormError),

    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Form(_) => StatusCode::BAD_REQUEST,
            ApiError::Predict(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
