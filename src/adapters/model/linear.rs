//! Linear regression over the three form features.
//!
//! Coefficients come from configuration; there is no training or artifact parsing here.

use crate::domain::{CalculationError, SleepFeatures};
use crate::ports::{ModelSource, PredictionModel};
use std::sync::Arc;
use tracing::trace;

/// Weights of `intercept + wake*w + sleep*s + coffee*c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelCoefficients {
    pub intercept: f64,
    /// Per second since midnight.
    pub wake_weight: f64,
    /// Per desired hour of sleep.
    pub sleep_weight: f64,
    /// Per daily cup of coffee.
    pub coffee_weight: f64,
}

impl Default for ModelCoefficients {
    /// Desired sleep plus six minutes per cup of coffee.
    fn default() -> Self {
        Self {
            intercept: 0.0,
            wake_weight: 0.0,
            sleep_weight: 1.0,
            coffee_weight: 0.1,
        }
    }
}

impl ModelCoefficients {
    fn is_finite(&self) -> bool {
        [
            self.intercept,
            self.wake_weight,
            self.sleep_weight,
            self.coffee_weight,
        ]
        .iter()
        .all(|w| w.is_finite())
    }
}

/// Sleep model backed by [`ModelCoefficients`].
#[derive(Debug, Clone, Default)]
pub struct LinearSleepModel {
    coefficients: ModelCoefficients,
}

impl LinearSleepModel {
    pub fn new(coefficients: ModelCoefficients) -> Self {
        Self { coefficients }
    }
}

impl PredictionModel for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> Result<f64, CalculationError> {
        if !(features.wake.is_finite()
            && features.estimated_sleep.is_finite()
            && features.coffee.is_finite())
        {
            return Err(CalculationError::ModelUnavailable(
                "features must be finite".into(),
            ));
        }
        let c = &self.coefficients;
        let hours = c.intercept
            + c.wake_weight * features.wake
            + c.sleep_weight * features.estimated_sleep
            + c.coffee_weight * features.coffee;
        trace!(
            wake = features.wake,
            estimated_sleep = features.estimated_sleep,
            coffee = features.coffee,
            hours,
            "linear model prediction"
        );
        if !hours.is_finite() {
            return Err(CalculationError::ModelUnavailable(
                "prediction overflowed".into(),
            ));
        }
        Ok(hours)
    }
}

impl ModelSource for LinearSleepModel {
    fn load(&self) -> Result<Arc<dyn PredictionModel>, CalculationError> {
        if !self.coefficients.is_finite() {
            return Err(CalculationError::ModelUnavailable(
                "model coefficients are not finite".into(),
            ));
        }
        Ok(Arc::new(self.clone()))
    }
}
