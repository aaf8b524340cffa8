//! Error types for the anofox-stl library.

use std::fmt;

use thiserror::Error;

/// Result type alias for decomposition operations.
pub type Result<T> = std::result::Result<T, DecompositionError>;

/// The LOESS window a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Cycle-subseries smoothing window.
    Seasonal,
    /// Trend smoothing window.
    Trend,
    /// Smoothing window applied after the low-pass moving averages.
    LowPass,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Seasonal => f.write_str("seasonal"),
            Component::Trend => f.write_str("trend"),
            Component::LowPass => f.write_str("low_pass"),
        }
    }
}

/// Errors that can occur while validating a decomposition request.
///
/// Every variant is raised before any numeric work begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecompositionError {
    /// A smoothing window is shorter than three observations.
    #[error("{0}_length must be at least 3")]
    LengthTooSmall(Component),

    /// A smoothing window has an even length.
    #[error("{0}_length must be odd")]
    EvenLength(Component),

    /// A local polynomial degree other than 0 or 1 was requested.
    #[error("{0}_degree must be 0 or 1")]
    InvalidDegree(Component),

    /// A jump stride of zero was requested.
    #[error("{0}_jump must be at least 1")]
    InvalidJump(Component),

    /// The seasonal period is smaller than 2.
    #[error("period must be at least 2")]
    PeriodTooSmall,

    /// The series does not cover two full periods.
    #[error("series has less than two periods")]
    SeriesTooShort,

    /// A multi-seasonal fit was requested without any period.
    #[error("periods must not be empty")]
    EmptyPeriods,

    /// One of the declared periods is smaller than 2.
    #[error("periods must be at least 2")]
    PeriodsTooSmall,

    /// The power transform parameter lies outside [0, 1].
    #[error("lambda must be between 0 and 1")]
    LambdaOutOfRange,

    /// Per-period seasonal lengths do not line up with the periods.
    #[error("seasonal_lengths must have the same length as periods")]
    SeasonalLengthsMismatch,

    /// A multi-seasonal fit was configured with zero iterations.
    #[error("iterations must be at least 1")]
    InvalidIterations,
}
