//! Fixed-output model for testing without a trained model.
//!
//! Returns the same prediction for any features, or fails on demand.

use crate::domain::{CalculationError, SleepFeatures};
use crate::ports::{ModelSource, PredictionModel};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Behavior {
    Predict(f64),
    FailPrediction,
    FailLoad,
}

/// Deterministic stand-in for the trained model.
#[derive(Debug)]
pub struct FixedModel {
    behavior: Behavior,
    /// Simulated inference time.
    delay: Duration,
    calls: AtomicUsize,
}

impl FixedModel {
    /// Always predicts `hours`.
    pub fn new(hours: f64) -> Arc<Self> {
        Self::build(Behavior::Predict(hours), Duration::ZERO)
    }

    /// Predicts `hours` after blocking for `delay`.
    pub fn with_delay(hours: f64, delay: Duration) -> Arc<Self> {
        Self::build(Behavior::Predict(hours), delay)
    }

    /// Loads fine, every prediction fails.
    pub fn failing() -> Arc<Self> {
        Self::build(Behavior::FailPrediction, Duration::ZERO)
    }

    /// Fails to load.
    pub fn unloadable() -> Arc<Self> {
        Self::build(Behavior::FailLoad, Duration::ZERO)
    }

    fn build(behavior: Behavior, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of predictions requested so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PredictionModel for FixedModel {
    fn predict(&self, _features: &SleepFeatures) -> Result<f64, CalculationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        match self.behavior {
            Behavior::Predict(hours) => Ok(hours),
            Behavior::FailPrediction | Behavior::FailLoad => Err(
                CalculationError::ModelUnavailable("fixed model configured to fail".into()),
            ),
        }
    }
}

/// `Arc<FixedModel>` is its own source so tests can keep a handle for [`FixedModel::calls`].
impl ModelSource for Arc<FixedModel> {
    fn load(&self) -> Result<Arc<dyn PredictionModel>, CalculationError> {
        if self.behavior == Behavior::FailLoad {
            return Err(CalculationError::ModelUnavailable(
                "fixed model configured not to load".into(),
            ));
        }
        Ok(Arc::clone(self) as Arc<dyn PredictionModel>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> SleepFeatures {
        SleepFeatures {
            wake: 25_200.0,
            estimated_sleep: 8.0,
            coffee: 1.0,
        }
    }

    #[test]
    fn test_fixed_prediction_counts_calls() {
        let model = FixedModel::new(7.5);
        let loaded = model.load().unwrap();
        assert_eq!(loaded.predict(&features()).unwrap(), 7.5);
        assert_eq!(loaded.predict(&features()).unwrap(), 7.5);
        assert_eq!(model.calls(), 2);
    }

    #[test]
    fn test_failure_modes() {
        assert!(FixedModel::unloadable().load().is_err());
        let loaded = FixedModel::failing().load().unwrap();
        assert!(matches!(
            loaded.predict(&features()),
            Err(CalculationError::ModelUnavailable(_))
        ));
    }
}
