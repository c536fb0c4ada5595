//! Application configuration. Form bounds, clock style, model coefficients.

use crate::adapters::model::ModelCoefficients;
use crate::domain::{ClockStyle, CoffeeRange, SleepRange, WakeTime};
use crate::usecases::bedtime_calculator::DEFAULT_SECONDS_PER_WAKE_UNIT;
use serde::Deserialize;
use tracing::warn;

/// Environment variables are read as `BETTER_REST_<KEY>`.
const ENV_PREFIX: &str = "BETTER_REST";

/// Every key is optional; `*_or_default()` fills the gaps.
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Initial wake time as 24-hour `HH:MM`. Read from BETTER_REST_DEFAULT_WAKE_TIME.
    #[serde(default)]
    pub default_wake_time: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Form bounds
    // ─────────────────────────────────────────────────────────────────────────
    /// Smallest selectable sleep amount in hours (default 4).
    #[serde(default)]
    pub sleep_min: Option<f64>,

    /// Largest selectable sleep amount in hours (default 12).
    #[serde(default)]
    pub sleep_max: Option<f64>,

    /// Picker increment in hours (default 1).
    #[serde(default)]
    pub sleep_step: Option<f64>,

    /// Fewest cups selectable (default 1).
    #[serde(default)]
    pub coffee_min: Option<u32>,

    /// Most cups selectable (default 20).
    #[serde(default)]
    pub coffee_max: Option<u32>,

    // ─────────────────────────────────────────────────────────────────────────
    // Calculation
    // ─────────────────────────────────────────────────────────────────────────
    /// Multiplier from minutes since midnight to the model's wake feature (default 60, i.e. seconds).
    #[serde(default)]
    pub seconds_per_wake_unit: Option<f64>,

    /// `12h` or `24h`. Read from BETTER_REST_CLOCK.
    #[serde(default)]
    pub clock: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Model coefficients
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub model_intercept: Option<f64>,

    #[serde(default)]
    pub model_wake_weight: Option<f64>,

    #[serde(default)]
    pub model_sleep_weight: Option<f64>,

    #[serde(default)]
    pub model_coffee_weight: Option<f64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var("BETTER_REST_CONFIG")
            .ok()
            .map(|path| config::File::with_name(&path));
        Self::from_sources(config::Environment::with_prefix(ENV_PREFIX), file)
    }

    /// Environment first, then the optional file (file keys win).
    fn from_sources<F>(env: config::Environment, file: Option<F>) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let mut c = config::Config::builder().add_source(env);
        if let Some(file) = file {
            c = c.add_source(file);
        }
        c.build()?.try_deserialize()
    }

    /// Initial wake time. Falls back to 07:00 if unset or unparsable.
    pub fn default_wake_time_or_default(&self) -> WakeTime {
        match self.default_wake_time.as_deref().map(str::parse::<WakeTime>) {
            Some(Ok(wake)) => wake,
            Some(Err(e)) => {
                warn!(error = %e, "ignoring BETTER_REST_DEFAULT_WAKE_TIME");
                WakeTime::default()
            }
            None => WakeTime::default(),
        }
    }

    /// Sleep picker bounds. Falls back to 4..=12 step 1 if the configured range is invalid.
    pub fn sleep_range_or_default(&self) -> SleepRange {
        let fallback = SleepRange::default();
        let min = self.sleep_min.unwrap_or(fallback.min());
        let max = self.sleep_max.unwrap_or(fallback.max());
        let step = self.sleep_step.unwrap_or(1.0);
        SleepRange::new(min, max, step).unwrap_or_else(|e| {
            warn!(error = %e, "using default sleep range");
            fallback
        })
    }

    /// Coffee bounds. Falls back to 1..=20 if the configured range is invalid.
    pub fn coffee_range_or_default(&self) -> CoffeeRange {
        let fallback = CoffeeRange::default();
        let min = self.coffee_min.unwrap_or(fallback.min());
        let max = self.coffee_max.unwrap_or(fallback.max());
        CoffeeRange::new(min, max).unwrap_or_else(|e| {
            warn!(error = %e, "using default coffee range");
            fallback
        })
    }

    /// Defaults to 60 (wake feature in seconds) if unset or not a positive finite number.
    pub fn seconds_per_wake_unit_or_default(&self) -> f64 {
        match self.seconds_per_wake_unit {
            Some(v) if v.is_finite() && v > 0.0 => v,
            Some(v) => {
                warn!(value = v, "ignoring seconds_per_wake_unit");
                DEFAULT_SECONDS_PER_WAKE_UNIT
            }
            None => DEFAULT_SECONDS_PER_WAKE_UNIT,
        }
    }

    /// Defaults to the 12-hour clock.
    pub fn clock_or_default(&self) -> ClockStyle {
        match self.clock.as_deref().map(str::parse::<ClockStyle>) {
            Some(Ok(clock)) => clock,
            Some(Err(e)) => {
                warn!(error = %e, "using 12h clock");
                ClockStyle::default()
            }
            None => ClockStyle::default(),
        }
    }

    /// Configured weights over [`ModelCoefficients::default`].
    pub fn model_coefficients_or_default(&self) -> ModelCoefficients {
        let d = ModelCoefficients::default();
        ModelCoefficients {
            intercept: self.model_intercept.unwrap_or(d.intercept),
            wake_weight: self.model_wake_weight.unwrap_or(d.wake_weight),
            sleep_weight: self.model_sleep_weight.unwrap_or(d.sleep_weight),
            coffee_weight: self.model_coffee_weight.unwrap_or(d.coffee_weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.default_wake_time_or_default(), WakeTime::new(7, 0).unwrap());
        assert_eq!(cfg.sleep_range_or_default(), SleepRange::default());
        assert_eq!(cfg.coffee_range_or_default(), CoffeeRange::default());
        assert_eq!(cfg.seconds_per_wake_unit_or_default(), 60.0);
        assert_eq!(cfg.clock_or_default(), ClockStyle::TwelveHour);
        assert_eq!(cfg.model_coefficients_or_default(), ModelCoefficients::default());
    }

    #[test]
    fn test_configured_values_win() {
        let cfg = AppConfig {
            default_wake_time: Some("06:45".into()),
            sleep_min: Some(5.0),
            sleep_max: Some(9.0),
            sleep_step: Some(0.5),
            coffee_min: Some(0),
            coffee_max: Some(10),
            seconds_per_wake_unit: Some(1.0),
            clock: Some("24h".into()),
            model_coffee_weight: Some(0.25),
            ..AppConfig::default()
        };
        assert_eq!(cfg.default_wake_time_or_default().to_string(), "06:45");
        assert_eq!(cfg.sleep_range_or_default().values().len(), 9);
        assert_eq!(cfg.coffee_range_or_default(), CoffeeRange::new(0, 10).unwrap());
        assert_eq!(cfg.seconds_per_wake_unit_or_default(), 1.0);
        assert_eq!(cfg.clock_or_default(), ClockStyle::TwentyFourHour);
        let coefficients = cfg.model_coefficients_or_default();
        assert_eq!(coefficients.coffee_weight, 0.25);
        assert_eq!(coefficients.sleep_weight, 1.0);
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_env_keys_map_to_fields() {
        let cfg = AppConfig::from_sources(
            env(&[
                ("BETTER_REST_DEFAULT_WAKE_TIME", "05:30"),
                ("BETTER_REST_SLEEP_MIN", "6"),
                ("BETTER_REST_COFFEE_MAX", "8"),
                ("BETTER_REST_CLOCK", "24h"),
                ("BETTER_REST_MODEL_COFFEE_WEIGHT", "0.5"),
                ("OTHER_SLEEP_MAX", "99"),
            ]),
            None::<config::Environment>,
        )
        .unwrap();
        assert_eq!(cfg.default_wake_time_or_default().to_string(), "05:30");
        assert_eq!(cfg.sleep_min, Some(6.0));
        assert_eq!(cfg.sleep_max, None);
        assert_eq!(cfg.coffee_max, Some(8));
        assert_eq!(cfg.clock_or_default(), ClockStyle::TwentyFourHour);
        assert_eq!(cfg.model_coefficients_or_default().coffee_weight, 0.5);
    }

    #[test]
    fn test_config_file_overrides_env() {
        let file = config::File::from_str(
            "sleep_max = 10.0\nsleep_step = 0.5\nclock = \"12h\"\nseconds_per_wake_unit = 1.0\n",
            config::FileFormat::Toml,
        );
        let cfg = AppConfig::from_sources(env(&[("BETTER_REST_CLOCK", "24h")]), Some(file)).unwrap();
        assert_eq!(cfg.clock_or_default(), ClockStyle::TwelveHour);
        assert_eq!(cfg.sleep_range_or_default(), SleepRange::new(4.0, 10.0, 0.5).unwrap());
        assert_eq!(cfg.seconds_per_wake_unit_or_default(), 1.0);
    }

    #[test]
    fn test_oversized_sleep_range_falls_back() {
        let cfg = AppConfig {
            sleep_step: Some(1e-300),
            ..AppConfig::default()
        };
        let range = cfg.sleep_range_or_default();
        assert_eq!(range, SleepRange::default());

        let form = crate::usecases::BedtimeForm::new(
            cfg.default_wake_time_or_default(),
            range,
            cfg.coffee_range_or_default(),
        );
        assert_eq!(form.sleep_amount().hours(), 8.0);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = AppConfig {
            default_wake_time: Some("late".into()),
            sleep_min: Some(10.0),
            sleep_max: Some(4.0),
            coffee_min: Some(9),
            coffee_max: Some(3),
            seconds_per_wake_unit: Some(-5.0),
            clock: Some("sundial".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.default_wake_time_or_default(), WakeTime::default());
        assert_eq!(cfg.sleep_range_or_default(), SleepRange::default());
        assert_eq!(cfg.coffee_range_or_default(), CoffeeRange::default());
        assert_eq!(cfg.seconds_per_wake_unit_or_default(), 60.0);
        assert_eq!(cfg.clock_or_default(), ClockStyle::TwelveHour);
    }
}
