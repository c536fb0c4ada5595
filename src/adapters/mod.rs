//! Infrastructure adapters. Implement ports.
//!
//! Prediction model and terminal UI. Map errors to DomainError.

pub mod model;
pub mod ui;
