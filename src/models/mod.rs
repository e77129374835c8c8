//! Fitted model components

pub mod inference;
pub mod loader;
pub mod ridge;
pub mod scaler;

pub use inference::InferenceEngine;
pub use loader::ModelLoader;
pub use ridge::RidgeRegressor;
pub use scaler::StandardScaler;
