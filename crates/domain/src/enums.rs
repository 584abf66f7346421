use serde::{Deserialize, Serialize};
use std::fmt;

/// How the battery is usually charged.
///
/// Each habit scales cycle aging by a fixed multiplicative factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChargingHabit {
    /// Charge to 100% every time.
    #[default]
    Full,
    /// Keep the charge between 20% and 80%.
    Partial,
    /// Fast charging.
    Fast,
    /// Slow charging.
    Slow,
}

impl ChargingHabit {
    /// All habits, in the order they are offered to the user.
    pub const ALL: [ChargingHabit; 4] = [
        ChargingHabit::Full,
        ChargingHabit::Partial,
        ChargingHabit::Fast,
        ChargingHabit::Slow,
    ];

    /// Multiplier applied to cycle aging.
    #[must_use]
    pub fn habit_factor(&self) -> f64 {
        match self {
            ChargingHabit::Full => 1.0,
            ChargingHabit::Partial => 0.6,
            ChargingHabit::Fast => 1.2,
            ChargingHabit::Slow => 0.8,
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ChargingHabit::Full => "Charge to 100% (Full)",
            ChargingHabit::Partial => "Partial charge (20-80%)",
            ChargingHabit::Fast => "Fast charging",
            ChargingHabit::Slow => "Slow charging",
        }
    }
}

impl fmt::Display for ChargingHabit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Health classification of a SoH value, used for the battery icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    /// SoH at or above 80%.
    Healthy,
    /// SoH between 60% (inclusive) and 80%.
    Degraded,
    /// SoH below 60%.
    Critical,
}

impl HealthBand {
    /// Classifies a SoH percentage.
    #[must_use]
    pub fn from_soh(soh_pct: f64) -> Self {
        if soh_pct >= 80.0 {
            HealthBand::Healthy
        } else if soh_pct >= 60.0 {
            HealthBand::Degraded
        } else {
            HealthBand::Critical
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "Healthy",
            HealthBand::Degraded => "Degraded",
            HealthBand::Critical => "Critical",
        }
    }

    /// Color-coded icon for terminal output.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "🟢🔋",
            HealthBand::Degraded => "🟠🔋",
            HealthBand::Critical => "🔴🪫",
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_factors() {
        assert_eq!(ChargingHabit::Full.habit_factor(), 1.0);
        assert_eq!(ChargingHabit::Partial.habit_factor(), 0.6);
        assert_eq!(ChargingHabit::Fast.habit_factor(), 1.2);
        assert_eq!(ChargingHabit::Slow.habit_factor(), 0.8);
    }

    #[test]
    fn test_habit_default_is_full() {
        assert_eq!(ChargingHabit::default(), ChargingHabit::Full);
        assert_eq!(ChargingHabit::Partial.to_string(), "Partial charge (20-80%)");
    }

    #[test]
    fn test_health_band_boundaries() {
        assert_eq!(HealthBand::from_soh(100.0), HealthBand::Healthy);
        assert_eq!(HealthBand::from_soh(80.0), HealthBand::Healthy);
        assert_eq!(HealthBand::from_soh(79.99), HealthBand::Degraded);
        assert_eq!(HealthBand::from_soh(60.0), HealthBand::Degraded);
        assert_eq!(HealthBand::from_soh(59.99), HealthBand::Critical);
        assert_eq!(HealthBand::from_soh(0.0), HealthBand::Critical);
    }
}
