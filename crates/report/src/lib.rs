//! Presentation of simulation results.
//!
//! Every consumer here reads a finished [`SimulationResult`] and never
//! feeds anything back into the model:
//! - Text summary
//! - Chart model with a terminal renderer
//! - CSV and JSON export
//! - Battery care tips
//!
//! [`SimulationResult`]: battery_soh_domain::SimulationResult

/// Chart model and terminal renderer.
pub mod chart;
/// CSV export.
pub mod csv;
/// Export errors.
pub mod error;
/// JSON export.
pub mod json;
/// Text summary.
pub mod summary;
/// Battery care tips.
pub mod tips;

pub use error::ExportError;
