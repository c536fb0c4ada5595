//! Domain entities. Pure values for a single bedtime calculation.
//!
//! No prompt or model types here: adapters map their input into these.

use crate::domain::DomainError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target time to wake up. Time of day only, no date, seconds always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!("wake time {hour:02}:{minute:02} is not a time of day"))
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeTime {
    /// 07:00, the form's initial wake time.
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default())
    }
}

impl FromStr for WakeTime {
    type Err = DomainError;

    /// Parses 24-hour `HH:MM` (`"7:05"` and `"07:05"` both work).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| {
            DomainError::InvalidInput(format!("'{}' is not a HH:MM time ({e})", s.trim()))
        })?;
        Self::new(parsed.hour(), parsed.minute())
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Desired hours of sleep. Bounds are a presentation concern, see [`crate::domain::SleepRange`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub fn new(hours: f64) -> Self {
        Self(hours)
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Picker label, e.g. `"8 hours"` or `"7.25 hours"`.
    pub fn label(&self) -> String {
        format!("{} hours", format_hours(self.0))
    }
}

/// Daily coffee intake in cups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoffeeAmount(u32);

impl CoffeeAmount {
    pub fn new(cups: u32) -> Self {
        Self(cups)
    }

    pub fn cups(&self) -> u32 {
        self.0
    }

    /// `"1 cup"`, otherwise `"<n> cups"`.
    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

/// The three inputs of one calculation, captured from the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BedtimeRequest {
    pub wake_time: WakeTime,
    pub sleep_amount: SleepAmount,
    pub coffee_amount: CoffeeAmount,
}

/// Numeric feature vector handed to the prediction model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepFeatures {
    /// Wake time as minutes since midnight times `seconds_per_wake_unit`.
    pub wake: f64,
    /// Desired sleep in hours.
    pub estimated_sleep: f64,
    /// Cups of coffee per day.
    pub coffee: f64,
}

impl SleepFeatures {
    pub fn from_request(request: &BedtimeRequest, seconds_per_wake_unit: f64) -> Self {
        Self {
            wake: f64::from(request.wake_time.minutes_since_midnight()) * seconds_per_wake_unit,
            estimated_sleep: request.sleep_amount.hours(),
            coffee: f64::from(request.coffee_amount.cups()),
        }
    }
}

/// How a bedtime is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockStyle {
    /// `11:00 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `23:00`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockStyle {
    fn pattern(&self) -> &'static str {
        match self {
            ClockStyle::TwelveHour => "%-I:%M %p",
            ClockStyle::TwentyFourHour => "%H:%M",
        }
    }
}

impl FromStr for ClockStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" => Ok(ClockStyle::TwelveHour),
            "24h" | "24" => Ok(ClockStyle::TwentyFourHour),
            other => Err(DomainError::InvalidInput(format!(
                "unknown clock style '{other}' (expected 12h or 24h)"
            ))),
        }
    }
}

/// Recommended time to go to bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bedtime(NaiveTime);

impl Bedtime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Short time string: hour and minute, no seconds, no date.
    pub fn format(&self, clock: ClockStyle) -> String {
        self.0.format(clock.pattern()).to_string()
    }
}

/// Hours without trailing zeros: `8.0` -> `"8"`, `7.125` -> `"7.125"`.
/// Nine decimals hide float noise from stepped picker values (`4.300000000000001`).
fn format_hours(hours: f64) -> String {
    let fixed = format!("{hours:.9}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_time_parse_and_display() {
        let wake: WakeTime = "6:30".parse().unwrap();
        assert_eq!(wake.hour(), 6);
        assert_eq!(wake.minute(), 30);
        assert_eq!(wake.to_string(), "06:30");
        assert_eq!(wake.minutes_since_midnight(), 390);
    }

    #[test]
    fn test_wake_time_rejects_garbage() {
        assert!("25:00".parse::<WakeTime>().is_err());
        assert!("seven".parse::<WakeTime>().is_err());
        assert!(WakeTime::new(7, 60).is_err());
    }

    #[test]
    fn test_default_wake_time_is_seven() {
        assert_eq!(WakeTime::default(), WakeTime::new(7, 0).unwrap());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SleepAmount::new(8.0).label(), "8 hours");
        assert_eq!(SleepAmount::new(7.25).label(), "7.25 hours");
        assert_eq!(SleepAmount::new(4.5).label(), "4.5 hours");
        assert_eq!(SleepAmount::new(7.125).label(), "7.125 hours");
        assert_eq!(SleepAmount::new(4.0 + 3.0 * 0.1).label(), "4.3 hours");
        assert_eq!(CoffeeAmount::new(1).label(), "1 cup");
        assert_eq!(CoffeeAmount::new(0).label(), "0 cups");
        assert_eq!(CoffeeAmount::new(20).label(), "20 cups");
    }

    #[test]
    fn test_features_use_seconds_since_midnight() {
        let request = BedtimeRequest {
            wake_time: WakeTime::new(7, 15).unwrap(),
            sleep_amount: SleepAmount::new(8.0),
            coffee_amount: CoffeeAmount::new(3),
        };
        let features = SleepFeatures::from_request(&request, 60.0);
        assert_eq!(features.wake, 7.0 * 3600.0 + 15.0 * 60.0);
        assert_eq!(features.estimated_sleep, 8.0);
        assert_eq!(features.coffee, 3.0);
    }

    #[test]
    fn test_bedtime_format() {
        let bedtime = Bedtime::new(NaiveTime::from_hms_opt(23, 5, 0).unwrap());
        assert_eq!(bedtime.format(ClockStyle::TwelveHour), "11:05 PM");
        assert_eq!(bedtime.format(ClockStyle::TwentyFourHour), "23:05");

        let morning = Bedtime::new(NaiveTime::from_hms_opt(0, 30, 45).unwrap());
        assert_eq!(morning.format(ClockStyle::TwelveHour), "12:30 AM");
    }

    #[test]
    fn test_clock_style_parse() {
        assert_eq!("24h".parse::<ClockStyle>().unwrap(), ClockStyle::TwentyFourHour);
        assert_eq!(" 12H ".parse::<ClockStyle>().unwrap(), ClockStyle::TwelveHour);
        assert!("metric".parse::<ClockStyle>().is_err());
    }
}
