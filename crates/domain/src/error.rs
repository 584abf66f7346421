//! Parameter validation errors.

/// A simulation parameter outside its accepted range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// A value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Offending field.
        field: &'static str,
    },
    /// Initial capacity outside the accepted range.
    #[error("initial capacity {value} mAh is outside {min}..={max} mAh")]
    InitialCapacity {
        /// Given value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Charge cycles per week outside the accepted range.
    #[error("charge cycles per week {value} is outside {min}..={max}")]
    ChargeCycles {
        /// Given value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Average temperature outside the accepted range.
    #[error("average temperature {value} °C is outside {min}..={max} °C")]
    Temperature {
        /// Given value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Depth of discharge outside the accepted range.
    #[error("depth of discharge {value}% is outside {min}..={max}%")]
    DepthOfDischarge {
        /// Given value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Calendar aging factor outside the accepted range.
    #[error("calendar aging factor {value} is outside {min}..={max}")]
    CalendarAging {
        /// Given value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Horizon of zero days.
    #[error("horizon must be at least one day")]
    EmptyHorizon,
}
