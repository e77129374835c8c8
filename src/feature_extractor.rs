//! Feature extraction for FWI model inference.
//!
//! Builds the single-row input matrix in the column order the scaler and
//! the ridge model were fitted with.

use crate::types::observation::{Observation, FEATURE_COUNT, FEATURE_NAMES};
use ndarray::{arr2, Array2};

/// Feature extractor that turns observations into model input rows.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a `1 x FEATURE_COUNT` matrix from an observation.
    pub fn extract(&self, obs: &Observation) -> Array2<f64> {
        arr2(&[obs.to_array()])
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names, in column order.
    pub fn feature_names(&self) -> &'static [&'static str] {
        &FEATURE_NAMES
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_extraction() {
        let extractor = FeatureExtractor::new();
        let obs = Observation {
            temperature: 29.0,
            rh: 57.0,
            ws: 18.0,
            rain: 0.0,
            ffmc: 65.7,
            dmc: 3.4,
            isi: 1.3,
            classes: 0.0,
            region: 1.0,
        };

        let features = extractor.extract(&obs);

        assert_eq!(features.shape(), &[1, extractor.feature_count()]);
        assert_eq!(features[[0, 0]], 29.0); // Temperature
        assert_eq!(features[[0, 4]], 65.7); // FFMC
        assert_eq!(features[[0, 8]], 1.0); // Region
    }

    #[test]
    fn test_feature_count() {
        let extractor = FeatureExtractor::new();
        assert_eq!(extractor.feature_count(), 9);
        assert_eq!(extractor.feature_names().len(), 9);
        assert_eq!(extractor.feature_names()[0], "Temperature");
    }
}
