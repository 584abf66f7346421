//! State-of-Health degradation simulation.
//!
//! This crate provides the battery aging model:
//! - A pure day-stepped SoH recurrence with early termination
//! - Per-day degradation breakdown
//! - Threshold-crossing detection
//! - Charging-habit what-if comparison

/// Prelude module for convenient imports.
pub mod prelude;

/// Charging-habit comparison.
pub mod comparison;
/// Degradation model.
pub mod degradation;
/// Threshold-crossing detection.
pub mod threshold;

pub use degradation::simulate;
