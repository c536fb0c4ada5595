//! Input bounds enforced by the form, never by the calculation itself.

use crate::domain::{CoffeeAmount, DomainError, SleepAmount};

/// Slack for float steps so `4.0 + 32 * 0.25` still lands on 12.0.
const STEP_EPSILON: f64 = 1e-9;

/// Upper limit on picker entries.
pub const MAX_SLEEP_OPTIONS: usize = 1000;

/// Selectable sleep amounts: `min..=max` in `step` increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepRange {
    min: f64,
    max: f64,
    step: f64,
    /// Number of increments after `min`; bounded by `MAX_SLEEP_OPTIONS - 1`.
    steps: usize,
}

impl SleepRange {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, DomainError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(DomainError::InvalidInput(
                "sleep range values must be finite".into(),
            ));
        }
        if min <= 0.0 || min > max || step <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "invalid sleep range {min}..={max} step {step}"
            )));
        }
        let steps = ((max - min) / step + STEP_EPSILON).floor();
        if steps >= MAX_SLEEP_OPTIONS as f64 {
            return Err(DomainError::InvalidInput(format!(
                "sleep range {min}..={max} step {step} has more than {MAX_SLEEP_OPTIONS} options"
            )));
        }
        Ok(Self {
            min,
            max,
            step,
            steps: steps as usize,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Every selectable amount, ascending.
    pub fn values(&self) -> Vec<SleepAmount> {
        (0..=self.steps)
            .map(|i| SleepAmount::new(self.min + i as f64 * self.step))
            .collect()
    }

    /// Middle entry of [`Self::values`]; 8 hours for the default 4..=12 range.
    pub fn default_amount(&self) -> SleepAmount {
        let values = self.values();
        values
            .get(values.len() / 2)
            .copied()
            .unwrap_or(SleepAmount::new(self.min))
    }

    pub fn clamp(&self, amount: SleepAmount) -> SleepAmount {
        if amount.hours().is_nan() {
            return self.default_amount();
        }
        SleepAmount::new(amount.hours().clamp(self.min, self.max))
    }

    /// Index into [`Self::values`] closest to `amount`, used as the picker cursor.
    pub fn nearest_index(&self, amount: SleepAmount) -> usize {
        self.values()
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.hours() - amount.hours()).abs();
                let db = (b.hours() - amount.hours()).abs();
                da.total_cmp(&db)
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

impl Default for SleepRange {
    fn default() -> Self {
        Self {
            min: 4.0,
            max: 12.0,
            step: 1.0,
            steps: 8,
        }
    }
}

/// Allowed coffee counts, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoffeeRange {
    min: u32,
    max: u32,
}

impl CoffeeRange {
    pub fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidInput(format!(
                "invalid coffee range {min}..={max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, amount: CoffeeAmount) -> bool {
        (self.min..=self.max).contains(&amount.cups())
    }

    pub fn clamp(&self, amount: CoffeeAmount) -> CoffeeAmount {
        CoffeeAmount::new(amount.cups().clamp(self.min, self.max))
    }
}

impl Default for CoffeeRange {
    fn default() -> Self {
        Self { min: 1, max: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sleep_range_matches_picker() {
        let hours: Vec<f64> = SleepRange::default()
            .values()
            .iter()
            .map(SleepAmount::hours)
            .collect();
        assert_eq!(hours, vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        assert_eq!(SleepRange::default().default_amount(), SleepAmount::new(8.0));
    }

    #[test]
    fn test_quarter_hour_steps_reach_max() {
        let range = SleepRange::new(4.0, 12.0, 0.25).unwrap();
        let values = range.values();
        assert_eq!(values.len(), 33);
        assert_eq!(values.last().copied(), Some(SleepAmount::new(12.0)));
    }

    #[test]
    fn test_sleep_range_rejects_bad_bounds() {
        assert!(SleepRange::new(12.0, 4.0, 1.0).is_err());
        assert!(SleepRange::new(4.0, 12.0, 0.0).is_err());
        assert!(SleepRange::new(0.0, 12.0, 1.0).is_err());
        assert!(SleepRange::new(f64::NAN, 12.0, 1.0).is_err());
    }

    #[test]
    fn test_sleep_range_caps_option_count() {
        assert!(SleepRange::new(4.0, 12.0, 1e-300).is_err());
        assert!(SleepRange::new(4.0, 12.0, 1e-7).is_err());
        assert!(SleepRange::new(1e-300, f64::MAX, 1.0).is_err());

        let widest = SleepRange::new(1.0, 1000.0, 1.0).unwrap();
        assert_eq!(widest.values().len(), MAX_SLEEP_OPTIONS);
        assert!(SleepRange::new(1.0, 1001.0, 1.0).is_err());
    }

    #[test]
    fn test_sleep_clamp_and_cursor() {
        let range = SleepRange::default();
        assert_eq!(range.clamp(SleepAmount::new(2.0)), SleepAmount::new(4.0));
        assert_eq!(range.clamp(SleepAmount::new(15.0)), SleepAmount::new(12.0));
        assert_eq!(range.clamp(SleepAmount::new(f64::NAN)), SleepAmount::new(8.0));
        assert_eq!(range.nearest_index(SleepAmount::new(8.0)), 4);
        assert_eq!(range.nearest_index(SleepAmount::new(6.4)), 2);
    }

    #[test]
    fn test_coffee_range() {
        let range = CoffeeRange::default();
        assert!(range.contains(CoffeeAmount::new(1)));
        assert!(range.contains(CoffeeAmount::new(20)));
        assert!(!range.contains(CoffeeAmount::new(0)));
        assert_eq!(range.clamp(CoffeeAmount::new(25)), CoffeeAmount::new(20));
        assert_eq!(range.clamp(CoffeeAmount::new(0)), CoffeeAmount::new(1));
        assert!(CoffeeRange::new(5, 2).is_err());
    }
}
