//! Threshold-crossing detection.
//!
//! A threshold is crossed on the first day the SoH drops from at or above
//! the threshold to strictly below it.

use battery_soh_domain::value_objects::simulation_result::{ThresholdCrossing, ThresholdCrossings};
use tracing::debug;

/// Typical end-of-life threshold.
pub const EOL_THRESHOLD_PCT: f64 = 80.0;
/// Severely degraded threshold.
pub const SEVERE_THRESHOLD_PCT: f64 = 60.0;

/// Records the first crossing of each tracked threshold.
#[derive(Debug, Clone)]
pub struct ThresholdTracker {
    thresholds: Vec<f64>,
    crossings: ThresholdCrossings,
}

impl Default for ThresholdTracker {
    fn default() -> Self {
        Self::new(vec![EOL_THRESHOLD_PCT, SEVERE_THRESHOLD_PCT])
    }
}

impl ThresholdTracker {
    /// Creates a tracker for the given thresholds (SoH percent).
    #[must_use]
    pub fn new(thresholds: Vec<f64>) -> Self {
        Self {
            thresholds,
            crossings: ThresholdCrossings::new(),
        }
    }

    /// Thresholds being tracked.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Checks one simulated step.
    ///
    /// # Arguments
    ///
    /// * `day` - Day of `next_soh`
    /// * `previous_soh` - SoH of the day before
    /// * `next_soh` - SoH on `day`
    pub fn observe(&mut self, day: u32, previous_soh: f64, next_soh: f64) {
        for &threshold in &self.thresholds {
            if previous_soh >= threshold
                && next_soh < threshold
                && self.crossings.record(ThresholdCrossing::new(threshold, day))
            {
                debug!(threshold, day, "SoH crossed threshold");
            }
        }
    }

    /// Consumes the tracker and returns what was recorded.
    #[must_use]
    pub fn into_crossings(self) -> ThresholdCrossings {
        self.crossings
    }
}
