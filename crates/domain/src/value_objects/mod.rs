pub mod parameters;
pub mod simulation_result;

pub use parameters::{DAYS_PER_YEAR, SimulationParameters, limits};
pub use simulation_result::{SimulationResult, ThresholdCrossing, ThresholdCrossings};
