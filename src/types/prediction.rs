//! Prediction result

use std::fmt;

/// Predicted Fire Weather Index for one observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub fwi: f64,
}

impl Prediction {
    pub fn new(fwi: f64) -> Self {
        Self { fwi }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fwi)
    }
}
