//! Type definitions for the FWI predictor

pub mod observation;
pub mod prediction;

pub use observation::{Observation, RawObservation, FEATURE_COUNT, FEATURE_NAMES};
pub use prediction::Prediction;
