//! Text summary of a simulation run.

use battery_soh_domain::enums::HealthBand;
use battery_soh_domain::value_objects::parameters::{DAYS_PER_YEAR, SimulationParameters};
use battery_soh_domain::value_objects::simulation_result::SimulationResult;
use battery_soh_simulation::threshold::{EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT};
use std::fmt;

/// Outcome of one threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdStatus {
    /// Threshold in SoH percent.
    pub threshold_pct: f64,
    /// Crossing year, `None` when the battery stayed above it.
    pub crossed_at_year: Option<f64>,
}

impl fmt::Display for ThresholdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.crossed_at_year {
            Some(year) => write!(
                f,
                "Battery drops below {}% SoH after {:.1} years.",
                self.threshold_pct, year
            ),
            None => write!(
                f,
                "Battery stays above {}% SoH during simulation.",
                self.threshold_pct
            ),
        }
    }
}

/// Headline numbers of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Initial capacity in mAh.
    pub initial_capacity_mah: f64,
    /// Requested horizon in days.
    pub horizon_days: u32,
    /// Status of the 80% and 60% thresholds.
    pub thresholds: Vec<ThresholdStatus>,
    /// SoH on the last simulated day.
    pub final_soh_pct: f64,
    /// Capacity on the last simulated day.
    pub final_capacity_mah: f64,
    /// Health band of the final SoH.
    pub health: HealthBand,
    /// Last simulated day when the run stopped early.
    pub depleted_on_day: Option<u32>,
}

impl Summary {
    /// Builds the summary of a run.
    #[must_use]
    pub fn new(params: &SimulationParameters, result: &SimulationResult) -> Self {
        let thresholds = [EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT]
            .into_iter()
            .map(|threshold_pct| ThresholdStatus {
                threshold_pct,
                crossed_at_year: result.crossing_year(threshold_pct),
            })
            .collect();

        let final_soh_pct = result.final_soh();
        Self {
            initial_capacity_mah: params.initial_capacity_mah,
            horizon_days: params.horizon_days,
            thresholds,
            final_soh_pct,
            final_capacity_mah: result.final_capacity(),
            health: HealthBand::from_soh(final_soh_pct),
            depleted_on_day: result.terminated_early().then(|| result.final_day()),
        }
    }

    /// Horizon label, whole years printed without decimals.
    #[must_use]
    pub fn horizon_label(&self) -> String {
        if self.horizon_days % DAYS_PER_YEAR == 0 {
            format!("{}", self.horizon_days / DAYS_PER_YEAR)
        } else {
            format!(
                "{:.1}",
                f64::from(self.horizon_days) / f64::from(DAYS_PER_YEAR)
            )
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result Summary")?;
        writeln!(f, "Initial Capacity: {} mAh", self.initial_capacity_mah)?;
        for status in &self.thresholds {
            writeln!(f, "- {status}")?;
        }
        writeln!(
            f,
            "- Final SoH after {} years: {:.2}%",
            self.horizon_label(),
            self.final_soh_pct
        )?;
        writeln!(f, "- Final capacity: {:.0} mAh", self.final_capacity_mah)?;
        if let Some(day) = self.depleted_on_day {
            writeln!(f, "- Battery fully depleted on day {day}.")?;
        }
        write!(f, "- Health: {}", self.health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battery_soh_domain::enums::ChargingHabit;
    use battery_soh_simulation::simulate;

    #[test]
    fn test_summary_without_crossings() {
        let params = SimulationParameters::default();
        let summary = Summary::new(&params, &simulate(&params));
        let text = summary.to_string();

        assert!(text.contains("Initial Capacity: 4000 mAh"));
        assert!(text.contains("- Battery stays above 80% SoH during simulation."));
        assert!(text.contains("- Battery stays above 60% SoH during simulation."));
        assert!(text.contains("- Final SoH after 3 years: 95.61%"));
        assert!(text.contains("- Final capacity: 3824 mAh"));
        assert!(!text.contains("depleted"));
        assert_eq!(summary.health, HealthBand::Healthy);
    }

    #[test]
    fn test_summary_with_crossings_and_depletion() {
        let params = SimulationParameters::default()
            .with_charge_cycles_per_week(21.0)
            .with_temperature(60.0)
            .with_charging_habit(ChargingHabit::Fast)
            .with_depth_of_discharge(100.0)
            .with_calendar_aging(1.0)
            .with_years(10);
        let result = simulate(&params);
        let summary = Summary::new(&params, &result);

        assert!(summary.thresholds.iter().all(|t| t.crossed_at_year.is_some()));
        assert_eq!(summary.depleted_on_day, Some(result.final_day()));
        assert_eq!(summary.health, HealthBand::Critical);

        let text = summary.to_string();
        assert!(text.contains("Battery drops below 80% SoH after 0.3 years."));
        assert!(text.contains("- Final SoH after 10 years: 0.00%"));
        assert!(text.contains("- Final capacity: 0 mAh"));
    }

    #[test]
    fn test_horizon_label_partial_year() {
        let params = SimulationParameters::default().with_horizon_days(500);
        let summary = Summary::new(&params, &simulate(&params));
        assert_eq!(summary.horizon_label(), "1.4");
    }
}
