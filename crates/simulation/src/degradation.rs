//! Day-stepped State-of-Health degradation model.
//!
//! Every simulated day removes a fixed amount of SoH made of two parts:
//! cycle aging scaled by an exponential temperature factor, and calendar
//! aging. The run stops early once SoH reaches zero.

use crate::threshold::{EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT, ThresholdTracker};
use battery_soh_domain::value_objects::parameters::SimulationParameters;
use battery_soh_domain::value_objects::simulation_result::SimulationResult;
use serde::{Deserialize, Serialize};
use tracing::info;

/// SoH of a new battery, in percent.
pub const INITIAL_SOH_PCT: f64 = 100.0;

const DAYS_PER_WEEK: f64 = 7.0;

/// Per-day degradation components, in SoH percentage points.
///
/// The model has no state besides SoH, so these are constant for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyDegradation {
    /// Charge cycles per day.
    pub cycles_per_day: f64,
    /// Cycle aging before temperature scaling.
    pub cycle: f64,
    /// Temperature acceleration factor (1.0 at the reference temperature).
    pub temperature_factor: f64,
    /// Calendar aging.
    pub calendar: f64,
    /// Total SoH lost per day.
    pub total: f64,
}

impl DailyDegradation {
    /// Computes the breakdown with the default model constants.
    #[must_use]
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        DegradationSimulator::default().daily_degradation(params)
    }

    /// Cycle aging after temperature scaling.
    #[must_use]
    pub fn temperature_scaled_cycle(&self) -> f64 {
        self.cycle * self.temperature_factor
    }
}

/// Degradation model constants.
#[derive(Debug, Clone)]
pub struct DegradationSimulator {
    /// SoH lost per full cycle at 100% depth of discharge.
    pub base_rate_per_cycle: f64,
    /// Temperature at which the temperature factor is 1.0, in °C.
    pub reference_temperature_c: f64,
    /// Temperature increase that multiplies degradation by e, in °C.
    pub temperature_scale_c: f64,
    /// SoH lost per day at calendar aging factor 1.0.
    pub calendar_base_rate: f64,
    /// SoH thresholds whose crossings are recorded.
    pub thresholds: Vec<f64>,
}

impl Default for DegradationSimulator {
    fn default() -> Self {
        Self {
            base_rate_per_cycle: 0.005,
            reference_temperature_c: 25.0,
            temperature_scale_c: 15.0,
            calendar_base_rate: 0.00005,
            thresholds: vec![EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT],
        }
    }
}

impl DegradationSimulator {
    /// Sets the tracked thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Per-day degradation for the given parameters.
    #[must_use]
    pub fn daily_degradation(&self, params: &SimulationParameters) -> DailyDegradation {
        let cycles_per_day = params.charge_cycles_per_week / DAYS_PER_WEEK;
        let cycle = cycles_per_day
            * self.base_rate_per_cycle
            * (params.depth_of_discharge_pct / 100.0)
            * params.charging_habit.habit_factor();
        let temperature_factor = ((params.average_temperature_c - self.reference_temperature_c)
            / self.temperature_scale_c)
            .exp();
        let calendar = self.calendar_base_rate * params.calendar_aging_factor;

        DailyDegradation {
            cycles_per_day,
            cycle,
            temperature_factor,
            calendar,
            total: cycle * temperature_factor + calendar,
        }
    }

    /// Runs the simulation.
    ///
    /// Performs no validation; any finite input gives a finite result.
    #[must_use]
    pub fn simulate(&self, params: &SimulationParameters) -> SimulationResult {
        let degradation = self.daily_degradation(params);
        let capacity_hint = params.horizon_days as usize + 1;

        info!(
            horizon_days = params.horizon_days,
            habit = ?params.charging_habit,
            daily_loss = degradation.total,
            "Starting degradation simulation"
        );

        let mut days = Vec::with_capacity(capacity_hint);
        let mut soh_pct = Vec::with_capacity(capacity_hint);
        let mut tracker = ThresholdTracker::new(self.thresholds.clone());

        days.push(0);
        soh_pct.push(INITIAL_SOH_PCT);
        let mut previous = INITIAL_SOH_PCT;

        for day in 1..=params.horizon_days {
            let next_soh = previous - degradation.total;
            soh_pct.push(next_soh.max(0.0));
            days.push(day);

            tracker.observe(day, previous, next_soh);

            if next_soh <= 0.0 {
                info!(day, "Battery depleted, stopping simulation early");
                break;
            }
            previous = next_soh;
        }

        let capacity_mah = soh_pct
            .iter()
            .map(|soh| params.initial_capacity_mah * soh / 100.0)
            .collect();

        let result = SimulationResult {
            days,
            soh_pct,
            capacity_mah,
            threshold_crossings: tracker.into_crossings(),
            horizon_days: params.horizon_days,
        };

        info!(
            days_simulated = result.final_day(),
            final_soh = result.final_soh(),
            "Simulation finished"
        );

        result
    }
}

/// Simulates SoH decay with the default model.
///
/// # Arguments
/// * `params` - Battery usage and horizon
///
/// # Returns
/// The day-by-day trajectory and threshold crossings
#[must_use]
pub fn simulate(params: &SimulationParameters) -> SimulationResult {
    DegradationSimulator::default().simulate(params)
}
