//! Prediction model adapters. Implement PredictionModel and ModelSource.
//!
//! Provides the configured linear regression and a fixed-output model for testing.

pub mod fixed_model;
pub mod linear;

pub use fixed_model::FixedModel;
pub use linear::{LinearSleepModel, ModelCoefficients};
