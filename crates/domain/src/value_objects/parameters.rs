//! Simulation input parameters.

use crate::enums::ChargingHabit;
use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// Days in one simulated year.
pub const DAYS_PER_YEAR: u32 = 365;

/// Accepted ranges for user supplied parameters.
pub mod limits {
    use std::ops::RangeInclusive;

    pub const INITIAL_CAPACITY_MAH: RangeInclusive<f64> = 500.0..=10_000.0;
    pub const CHARGE_CYCLES_PER_WEEK: RangeInclusive<f64> = 1.0..=21.0;
    pub const AVERAGE_TEMPERATURE_C: RangeInclusive<f64> = 10.0..=60.0;
    pub const DEPTH_OF_DISCHARGE_PCT: RangeInclusive<f64> = 10.0..=100.0;
    pub const CALENDAR_AGING_FACTOR: RangeInclusive<f64> = 0.0..=1.0;
    pub const YEARS: RangeInclusive<u32> = 1..=10;
}

/// Usage and environment of a single battery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Capacity when new, in mAh.
    pub initial_capacity_mah: f64,
    /// Full charge cycles per week.
    pub charge_cycles_per_week: f64,
    /// Average operating temperature in °C.
    pub average_temperature_c: f64,
    /// Usual charging habit.
    pub charging_habit: ChargingHabit,
    /// Average depth of discharge, in percent.
    pub depth_of_discharge_pct: f64,
    /// Calendar aging impact (0 = none, 1 = high).
    pub calendar_aging_factor: f64,
    /// Number of days to simulate.
    pub horizon_days: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_capacity_mah: 4000.0,
            charge_cycles_per_week: 7.0,
            average_temperature_c: 25.0,
            charging_habit: ChargingHabit::Full,
            depth_of_discharge_pct: 80.0,
            calendar_aging_factor: 0.2,
            horizon_days: 3 * DAYS_PER_YEAR,
        }
    }
}

impl SimulationParameters {
    /// Sets the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, mah: f64) -> Self {
        self.initial_capacity_mah = mah;
        self
    }

    /// Sets the number of charge cycles per week.
    #[must_use]
    pub fn with_charge_cycles_per_week(mut self, cycles: f64) -> Self {
        self.charge_cycles_per_week = cycles;
        self
    }

    /// Sets the average temperature.
    #[must_use]
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.average_temperature_c = celsius;
        self
    }

    /// Sets the charging habit.
    #[must_use]
    pub fn with_charging_habit(mut self, habit: ChargingHabit) -> Self {
        self.charging_habit = habit;
        self
    }

    /// Sets the depth of discharge.
    #[must_use]
    pub fn with_depth_of_discharge(mut self, pct: f64) -> Self {
        self.depth_of_discharge_pct = pct;
        self
    }

    /// Sets the calendar aging factor.
    #[must_use]
    pub fn with_calendar_aging(mut self, factor: f64) -> Self {
        self.calendar_aging_factor = factor;
        self
    }

    /// Sets the horizon in days.
    #[must_use]
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Sets the horizon in whole years.
    #[must_use]
    pub fn with_years(self, years: u32) -> Self {
        self.with_horizon_days(years.saturating_mul(DAYS_PER_YEAR))
    }

    /// Requested horizon expressed in years.
    #[must_use]
    pub fn horizon_years(&self) -> f64 {
        f64::from(self.horizon_days) / f64::from(DAYS_PER_YEAR)
    }

    /// Checks every field against [`limits`].
    ///
    /// The simulation itself accepts any input; this is meant for the
    /// layer that collects values from a user.
    ///
    /// # Errors
    ///
    /// Returns the first field found outside its range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("initial_capacity_mah", self.initial_capacity_mah),
            ("charge_cycles_per_week", self.charge_cycles_per_week),
            ("average_temperature_c", self.average_temperature_c),
            ("depth_of_discharge_pct", self.depth_of_discharge_pct),
            ("calendar_aging_factor", self.calendar_aging_factor),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParameterError::NotFinite { field });
        }

        let value = self.initial_capacity_mah;
        let range = limits::INITIAL_CAPACITY_MAH;
        if !range.contains(&value) {
            return Err(ParameterError::InitialCapacity {
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        let value = self.charge_cycles_per_week;
        let range = limits::CHARGE_CYCLES_PER_WEEK;
        if !range.contains(&value) {
            return Err(ParameterError::ChargeCycles {
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        let value = self.average_temperature_c;
        let range = limits::AVERAGE_TEMPERATURE_C;
        if !range.contains(&value) {
            return Err(ParameterError::Temperature {
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        let value = self.depth_of_discharge_pct;
        let range = limits::DEPTH_OF_DISCHARGE_PCT;
        if !range.contains(&value) {
            return Err(ParameterError::DepthOfDischarge {
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        let value = self.calendar_aging_factor;
        let range = limits::CALENDAR_AGING_FACTOR;
        if !range.contains(&value) {
            return Err(ParameterError::CalendarAging {
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        if self.horizon_days == 0 {
            return Err(ParameterError::EmptyHorizon);
        }

        Ok(())
    }
}
