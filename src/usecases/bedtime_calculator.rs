//! Bedtime calculation: wake time minus the sleep the model says is needed.
//!
//! Stateless. Every call loads the model, predicts, and wraps across midnight.

use crate::domain::{
    Bedtime, BedtimeRequest, CalculationError, ClockStyle, SleepFeatures,
};
use crate::ports::{ModelSource, PredictionModel};
use chrono::Duration;
use std::sync::Arc;
use tracing::debug;

/// Multiplier turning minutes since midnight into the model's wake feature (seconds).
pub const DEFAULT_SECONDS_PER_WAKE_UNIT: f64 = 60.0;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: i64 = 86_400;

/// Derive the bedtime for `request` using an already loaded model.
///
/// Inputs are not range-checked; anything the model accepts yields a bedtime.
///
/// # Errors
/// `CalculationError::ModelUnavailable` if the model fails or returns a non-finite number.
pub fn compute_bedtime(
    request: &BedtimeRequest,
    seconds_per_wake_unit: f64,
    model: &dyn PredictionModel,
) -> Result<Bedtime, CalculationError> {
    let features = SleepFeatures::from_request(request, seconds_per_wake_unit);
    let predicted_hours = model.predict(&features)?;
    if !predicted_hours.is_finite() {
        return Err(CalculationError::ModelUnavailable(format!(
            "model returned {predicted_hours}"
        )));
    }

    // Saturating cast, then fold into a single day before building the offset.
    let sleep_seconds = (predicted_hours * SECONDS_PER_HOUR).round() as i64;
    let offset = Duration::seconds(sleep_seconds.rem_euclid(SECONDS_PER_DAY));
    let bedtime = request.wake_time.as_naive_time() - offset;

    debug!(
        wake = %request.wake_time,
        sleep = request.sleep_amount.hours(),
        coffee = request.coffee_amount.cups(),
        predicted_hours,
        bedtime = %bedtime,
        "bedtime computed"
    );
    Ok(Bedtime::new(bedtime))
}

/// Use case wrapping a [`ModelSource`] with the unit and clock settings.
pub struct BedtimeCalculator {
    source: Arc<dyn ModelSource>,
    seconds_per_wake_unit: f64,
    clock: ClockStyle,
}

impl BedtimeCalculator {
    pub fn new(source: Arc<dyn ModelSource>, seconds_per_wake_unit: f64, clock: ClockStyle) -> Self {
        Self {
            source,
            seconds_per_wake_unit,
            clock,
        }
    }

    /// Load the model and compute the bedtime.
    pub fn calculate(&self, request: &BedtimeRequest) -> Result<Bedtime, CalculationError> {
        let model = self.source.load()?;
        compute_bedtime(request, self.seconds_per_wake_unit, model.as_ref())
    }

    /// Text for the form: the formatted bedtime, or the fixed failure message.
    pub fn display(&self, outcome: &Result<Bedtime, CalculationError>) -> String {
        match outcome {
            Ok(bedtime) => bedtime.format(self.clock),
            Err(e) => {
                debug!(error = %e, "bedtime unavailable");
                e.user_message().to_string()
            }
        }
    }

    /// Derived "ideal bedtime" string, re-evaluated on every call.
    pub fn ideal_bedtime(&self, request: &BedtimeRequest) -> String {
        self.display(&self.calculate(request))
    }
}
