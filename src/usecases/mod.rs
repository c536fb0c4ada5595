//! Application use cases. Orchestrate domain logic via ports.

pub mod bedtime_calculator;
pub mod bedtime_form;
pub mod live_bedtime;

pub use bedtime_calculator::{BedtimeCalculator, compute_bedtime};
pub use bedtime_form::BedtimeForm;
pub use live_bedtime::{BedtimeUpdate, LiveBedtime};
