//! Core domain layer. No external I/O dependencies.
//!
//! Form values, input bounds and errors live here. Dependencies flow inward.

pub mod bounds;
pub mod entities;
pub mod errors;

pub use bounds::{CoffeeRange, SleepRange};
pub use entities::{
    Bedtime, BedtimeRequest, ClockStyle, CoffeeAmount, SleepAmount, SleepFeatures, WakeTime,
};
pub use errors::{BEDTIME_FAILURE_MESSAGE, CalculationError, DomainError};
