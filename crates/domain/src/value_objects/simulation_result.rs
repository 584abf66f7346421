use crate::value_objects::parameters::DAYS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// First day at which SoH fell below a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCrossing {
    /// Threshold in SoH percent.
    pub threshold_pct: f64,
    /// Simulated day of the crossing.
    pub day: u32,
    /// Crossing time in years (`day / 365`).
    pub year: f64,
}

impl ThresholdCrossing {
    #[must_use]
    pub fn new(threshold_pct: f64, day: u32) -> Self {
        Self {
            threshold_pct,
            day,
            year: f64::from(day) / f64::from(DAYS_PER_YEAR),
        }
    }
}

/// Crossings recorded during a run, in the order they happened.
///
/// A threshold that was never crossed has no entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCrossings {
    crossings: Vec<ThresholdCrossing>,
}

impl ThresholdCrossings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a crossing unless one already exists for the threshold.
    ///
    /// Returns `true` when the crossing was recorded.
    pub fn record(&mut self, crossing: ThresholdCrossing) -> bool {
        if self.get(crossing.threshold_pct).is_some() {
            return false;
        }
        self.crossings.push(crossing);
        true
    }

    /// Crossing for a threshold, if any.
    #[must_use]
    pub fn get(&self, threshold_pct: f64) -> Option<&ThresholdCrossing> {
        self.crossings
            .iter()
            .find(|c| c.threshold_pct == threshold_pct)
    }

    /// Crossing year for a threshold, if any.
    #[must_use]
    pub fn year(&self, threshold_pct: f64) -> Option<f64> {
        self.get(threshold_pct).map(|c| c.year)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThresholdCrossing> {
        self.crossings.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.crossings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty()
    }
}

/// Day-by-day SoH trajectory of one battery.
///
/// `days`, `soh_pct` and `capacity_mah` always have the same length. The
/// series may be shorter than the requested horizon when SoH reached zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Simulated days, starting at 0.
    pub days: Vec<u32>,
    /// State of health per day, in percent.
    pub soh_pct: Vec<f64>,
    /// Remaining capacity per day, in mAh.
    pub capacity_mah: Vec<f64>,
    /// Threshold crossings.
    pub threshold_crossings: ThresholdCrossings,
    /// Number of days that were requested.
    pub horizon_days: u32,
}

impl SimulationResult {
    /// Number of samples, day 0 included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Last simulated day.
    #[must_use]
    pub fn final_day(&self) -> u32 {
        self.days.last().copied().unwrap_or(0)
    }

    /// SoH on the last simulated day.
    #[must_use]
    pub fn final_soh(&self) -> f64 {
        self.soh_pct.last().copied().unwrap_or(100.0)
    }

    /// Capacity on the last simulated day.
    #[must_use]
    pub fn final_capacity(&self) -> f64 {
        self.capacity_mah.last().copied().unwrap_or(0.0)
    }

    /// Time axis in years.
    #[must_use]
    pub fn years(&self) -> Vec<f64> {
        self.days
            .iter()
            .map(|&d| f64::from(d) / f64::from(DAYS_PER_YEAR))
            .collect()
    }

    /// Whether the run stopped before the requested horizon.
    #[must_use]
    pub fn terminated_early(&self) -> bool {
        self.final_day() < self.horizon_days
    }

    /// Crossing year for a threshold, if any.
    #[must_use]
    pub fn crossing_year(&self, threshold_pct: f64) -> Option<f64> {
        self.threshold_crossings.year(threshold_pct)
    }
}
