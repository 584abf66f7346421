//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use battery_soh_simulation::prelude::*;
//!
//! let result = simulate(&SimulationParameters::default());
//! assert_eq!(result.soh_pct[0], 100.0);
//! ```

// Model
pub use crate::degradation::{DailyDegradation, DegradationSimulator, INITIAL_SOH_PCT, simulate};

// Thresholds
pub use crate::threshold::{EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT, ThresholdTracker};

// Comparison
pub use crate::comparison::{HabitComparison, compare_charging_habits, compare_with};

// Domain types
pub use battery_soh_domain::{
    ChargingHabit, HealthBand, SimulationParameters, SimulationResult, ThresholdCrossing,
    ThresholdCrossings,
};
