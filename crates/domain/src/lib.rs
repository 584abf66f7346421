//! Domain types for the battery State-of-Health estimator.
//!
//! This crate holds the value objects shared by the simulation, the
//! report consumers and the command line front end:
//! - Simulation parameters with their accepted ranges
//! - Charging habits and health bands
//! - The simulated SoH trajectory and its threshold crossings

/// Enumerations.
pub mod enums;
/// Parameter validation errors.
pub mod error;
/// Value objects.
pub mod value_objects;

pub use enums::{ChargingHabit, HealthBand};
pub use error::ParameterError;
pub use value_objects::{
    DAYS_PER_YEAR, SimulationParameters, SimulationResult, ThresholdCrossing, ThresholdCrossings,
};
