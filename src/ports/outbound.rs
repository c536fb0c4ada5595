//! Outbound ports. Application calls into the prediction model.
//!
//! Implemented by adapters.

use crate::domain::{CalculationError, SleepFeatures};
use std::sync::Arc;

/// Trained regression model. Treated as a black box.
pub trait PredictionModel: Send + Sync {
    /// Predict the hours of sleep actually needed for the given features.
    ///
    /// # Errors
    /// Returns `CalculationError::ModelUnavailable` if the model cannot produce a prediction.
    fn predict(&self, features: &SleepFeatures) -> Result<f64, CalculationError>;
}

/// Loads a ready-to-use model. Called once per calculation.
pub trait ModelSource: Send + Sync {
    /// # Errors
    /// Returns `CalculationError::ModelUnavailable` if the model fails to initialize.
    fn load(&self) -> Result<Arc<dyn PredictionModel>, CalculationError>;
}
