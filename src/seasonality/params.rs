//! STL configuration and the derivation of its defaults.

use crate::error::{Component, DecompositionError, Result};

/// STL configuration.
///
/// Every field left as `None` is derived from the seasonal period when the
/// decomposition runs, following Cleveland et al. (1990):
///
/// | field             | default                                           |
/// |-------------------|---------------------------------------------------|
/// | `seasonal_length` | the period, raised to at least 3 and made odd     |
/// | `trend_length`    | `ceil(1.5 * period / (1 - 1.5 / seasonal_length))`, at least 3, odd |
/// | `low_pass_length` | the period, made odd                              |
/// | `low_pass_degree` | `trend_degree`                                    |
/// | `*_jump`          | `ceil(length / 10)` of the matching window        |
/// | `inner_loops`     | 2, or 1 when `robust`                             |
/// | `outer_loops`     | 0, or 15 when `robust`                            |
///
/// An explicit `low_pass_length` is used as given and must already be odd.
///
/// # Example
/// ```
/// use anofox_stl::seasonality::STLParams;
///
/// let params = STLParams {
///     seasonal_length: Some(7),
///     ..STLParams::robust()
/// };
/// let resolved = params.resolve(12);
/// assert_eq!(resolved.outer_loops, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct STLParams {
    /// Seasonal LOESS window (ns).
    pub seasonal_length: Option<usize>,
    /// Trend LOESS window (nt).
    pub trend_length: Option<usize>,
    /// Low-pass LOESS window (nl).
    pub low_pass_length: Option<usize>,
    /// Degree of the seasonal local polynomial, 0 or 1.
    pub seasonal_degree: usize,
    /// Degree of the trend local polynomial, 0 or 1.
    pub trend_degree: usize,
    /// Degree of the low-pass local polynomial, 0 or 1.
    pub low_pass_degree: Option<usize>,
    /// Evaluation stride of the seasonal smoother.
    pub seasonal_jump: Option<usize>,
    /// Evaluation stride of the trend smoother.
    pub trend_jump: Option<usize>,
    /// Evaluation stride of the low-pass smoother.
    pub low_pass_jump: Option<usize>,
    /// Passes of the inner loop per outer iteration.
    pub inner_loops: Option<usize>,
    /// Robustness iterations.
    pub outer_loops: Option<usize>,
    /// Use robust fitting defaults.
    pub robust: bool,
}

impl Default for STLParams {
    fn default() -> Self {
        Self {
            seasonal_length: None,
            trend_length: None,
            low_pass_length: None,
            seasonal_degree: 0,
            trend_degree: 1,
            low_pass_degree: None,
            seasonal_jump: None,
            trend_jump: None,
            low_pass_jump: None,
            inner_loops: None,
            outer_loops: None,
            robust: false,
        }
    }
}

impl STLParams {
    /// Defaults with robust fitting enabled.
    pub fn robust() -> Self {
        Self {
            robust: true,
            ..Self::default()
        }
    }

    /// Apply the derived defaults for `period`.
    pub fn resolve(&self, period: usize) -> ResolvedParams {
        let seasonal_length = make_odd(self.seasonal_length.unwrap_or(period).max(3));

        let np = period.max(2);
        let derived_trend =
            (1.5 * np as f64 / (1.0 - 1.5 / seasonal_length as f64)).ceil() as usize;
        let trend_length = make_odd(self.trend_length.unwrap_or(derived_trend).max(3));

        let low_pass_length = match self.low_pass_length {
            Some(length) => length,
            None => make_odd(np),
        };

        ResolvedParams {
            period,
            seasonal_length,
            trend_length,
            low_pass_length,
            seasonal_degree: self.seasonal_degree,
            trend_degree: self.trend_degree,
            low_pass_degree: self.low_pass_degree.unwrap_or(self.trend_degree),
            seasonal_jump: self
                .seasonal_jump
                .unwrap_or_else(|| seasonal_length.div_ceil(10)),
            trend_jump: self.trend_jump.unwrap_or_else(|| trend_length.div_ceil(10)),
            low_pass_jump: self
                .low_pass_jump
                .unwrap_or_else(|| low_pass_length.div_ceil(10)),
            inner_loops: self
                .inner_loops
                .unwrap_or(if self.robust { 1 } else { 2 }),
            outer_loops: self
                .outer_loops
                .unwrap_or(if self.robust { 15 } else { 0 }),
        }
    }
}

fn make_odd(value: usize) -> usize {
    if value % 2 == 0 {
        value + 1
    } else {
        value
    }
}

/// Effective STL settings for one period, with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedParams {
    /// Seasonal period (np).
    pub period: usize,
    /// Seasonal window (ns).
    pub seasonal_length: usize,
    /// Trend window (nt).
    pub trend_length: usize,
    /// Low-pass window (nl).
    pub low_pass_length: usize,
    /// Seasonal degree.
    pub seasonal_degree: usize,
    /// Trend degree.
    pub trend_degree: usize,
    /// Low-pass degree.
    pub low_pass_degree: usize,
    /// Seasonal stride.
    pub seasonal_jump: usize,
    /// Trend stride.
    pub trend_jump: usize,
    /// Low-pass stride.
    pub low_pass_jump: usize,
    /// Inner loop passes.
    pub inner_loops: usize,
    /// Robustness iterations.
    pub outer_loops: usize,
}

impl ResolvedParams {
    /// Check the settings, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            (
                Component::Seasonal,
                self.seasonal_length,
                self.seasonal_degree,
                self.seasonal_jump,
            ),
            (
                Component::Trend,
                self.trend_length,
                self.trend_degree,
                self.trend_jump,
            ),
            (
                Component::LowPass,
                self.low_pass_length,
                self.low_pass_degree,
                self.low_pass_jump,
            ),
        ];

        for &(component, length, _, _) in &windows {
            if length < 3 {
                return Err(DecompositionError::LengthTooSmall(component));
            }
        }
        if self.period < 2 {
            return Err(DecompositionError::PeriodTooSmall);
        }
        for &(component, _, degree, _) in &windows {
            if degree > 1 {
                return Err(DecompositionError::InvalidDegree(component));
            }
        }
        for &(component, length, _, _) in &windows {
            if length % 2 != 1 {
                return Err(DecompositionError::EvenLength(component));
            }
        }
        for &(component, _, _, jump) in &windows {
            if jump == 0 {
                return Err(DecompositionError::InvalidJump(component));
            }
        }
        Ok(())
    }
}
