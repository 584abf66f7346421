//! Charging-habit what-if comparison.
//!
//! Runs one independent simulation per charging habit with every other
//! parameter unchanged.

use crate::degradation::DegradationSimulator;
use battery_soh_domain::enums::ChargingHabit;
use battery_soh_domain::value_objects::parameters::SimulationParameters;
use battery_soh_domain::value_objects::simulation_result::ThresholdCrossings;
use serde::{Deserialize, Serialize};

/// Outcome of one habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitComparison {
    /// Habit simulated.
    pub habit: ChargingHabit,
    /// SoH at the end of the run.
    pub final_soh_pct: f64,
    /// Capacity at the end of the run.
    pub final_capacity_mah: f64,
    /// Last simulated day.
    pub days_simulated: u32,
    /// Threshold crossings of the run.
    pub crossings: ThresholdCrossings,
}

/// Compares all charging habits using the default model.
#[must_use]
pub fn compare_charging_habits(params: &SimulationParameters) -> Vec<HabitComparison> {
    compare_with(&DegradationSimulator::default(), params)
}

/// Compares all charging habits with a given simulator.
///
/// Results follow [`ChargingHabit::ALL`] order.
#[must_use]
pub fn compare_with(
    simulator: &DegradationSimulator,
    params: &SimulationParameters,
) -> Vec<HabitComparison> {
    ChargingHabit::ALL
        .iter()
        .map(|&habit| {
            let run = simulator.simulate(&params.clone().with_charging_habit(habit));
            HabitComparison {
                habit,
                final_soh_pct: run.final_soh(),
                final_capacity_mah: run.final_capacity(),
                days_simulated: run.final_day(),
                crossings: run.threshold_crossings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_covers_all_habits_in_order() {
        let rows = compare_charging_habits(&SimulationParameters::default());
        let habits: Vec<_> = rows.iter().map(|r| r.habit).collect();
        assert_eq!(habits, ChargingHabit::ALL.to_vec());
    }

    #[test]
    fn test_compare_orders_by_habit_factor() {
        let rows = compare_charging_habits(&SimulationParameters::default().with_years(5));
        let soh = |habit| {
            rows.iter()
                .find(|r| r.habit == habit)
                .map(|r| r.final_soh_pct)
                .unwrap()
        };

        assert!(soh(ChargingHabit::Partial) > soh(ChargingHabit::Slow));
        assert!(soh(ChargingHabit::Slow) > soh(ChargingHabit::Full));
        assert!(soh(ChargingHabit::Full) > soh(ChargingHabit::Fast));
    }

    #[test]
    fn test_compare_ignores_selected_habit() {
        let a = compare_charging_habits(&SimulationParameters::default());
        let b = compare_charging_habits(
            &SimulationParameters::default().with_charging_habit(ChargingHabit::Fast),
        );
        assert_eq!(a, b);
    }
}
