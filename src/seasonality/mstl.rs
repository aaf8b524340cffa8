//! MSTL (Multiple Seasonal-Trend decomposition using LOESS) implementation.
//!
//! MSTL extends STL to handle multiple seasonal periods, such as daily and weekly
//! patterns in hourly data. Periods are fitted from shortest to longest, each
//! on the series with every other current seasonal estimate removed, and the
//! trend of the last fit becomes the shared trend.

use num_traits::Float;

use super::params::{ResolvedParams, STLParams};
use super::stl::decompose;
use crate::error::{DecompositionError, Result};
use crate::transform::boxcox;
use crate::utils::stats::strength;

/// Result of MSTL decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct MSTLResult<T> {
    /// Seasonal components, one per period, in the order the periods were given.
    pub seasonal_components: Vec<Vec<T>>,
    /// The seasonal periods corresponding to each component.
    pub seasonal_periods: Vec<usize>,
    /// Trend component.
    pub trend: Vec<T>,
    /// Remainder component.
    pub remainder: Vec<T>,
}

impl<T: Float> MSTLResult<T> {
    /// Get the total seasonal component (sum of all seasonal components).
    pub fn total_seasonal(&self) -> Vec<T> {
        let mut total = vec![T::zero(); self.trend.len()];
        for component in &self.seasonal_components {
            for (t, &s) in total.iter_mut().zip(component.iter()) {
                *t = *t + s;
            }
        }
        total
    }

    /// Seasonal strength of every component, in period order.
    pub fn seasonal_strengths(&self) -> Vec<T> {
        self.seasonal_components
            .iter()
            .map(|seasonal| strength(seasonal, &self.remainder))
            .collect()
    }

    /// Get seasonal strength for a specific period.
    pub fn seasonal_strength(&self, period_idx: usize) -> Option<T> {
        self.seasonal_components
            .get(period_idx)
            .map(|seasonal| strength(seasonal, &self.remainder))
    }

    /// Get trend strength.
    pub fn trend_strength(&self) -> T {
        strength(&self.trend, &self.remainder)
    }
}

/// MSTL configuration.
///
/// # Example
/// ```
/// use anofox_stl::seasonality::MSTLParams;
///
/// let series: Vec<f64> = (0..60)
///     .map(|i| (i % 6) as f64 + 0.5 * (i % 10) as f64)
///     .collect();
/// let result = MSTLParams::default().fit(&series, &[10, 6]).unwrap();
/// assert_eq!(result.seasonal_periods, vec![10, 6]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MSTLParams {
    /// Number of passes over all periods. Forced to 1 for a single period.
    pub iterations: usize,
    /// Box-Cox parameter in [0, 1] applied to the series before fitting.
    pub lambda: Option<f64>,
    /// Seasonal window for each period, in the order the periods are given.
    pub seasonal_lengths: Option<Vec<usize>>,
    /// Settings shared by every per-period STL fit.
    pub stl_params: STLParams,
}

impl Default for MSTLParams {
    fn default() -> Self {
        Self {
            iterations: 2,
            lambda: None,
            seasonal_lengths: None,
            stl_params: STLParams::default(),
        }
    }
}

impl MSTLParams {
    /// Decompose `series` into one seasonal component per entry of `periods`.
    ///
    /// # Errors
    /// Returns a [`DecompositionError`] if the periods, lambda, seasonal
    /// lengths, or any derived per-period STL configuration are invalid.
    pub fn fit<T: Float>(&self, series: &[T], periods: &[usize]) -> Result<MSTLResult<T>> {
        self.validate(series.len(), periods)?;

        // Shortest period first; ties keep their given order
        let mut order: Vec<usize> = (0..periods.len()).collect();
        order.sort_by_key(|&idx| periods[idx]);

        let mut rank = vec![0; periods.len()];
        for (r, &idx) in order.iter().enumerate() {
            rank[idx] = r;
        }

        let plans = periods
            .iter()
            .enumerate()
            .map(|(idx, &period)| {
                let params = self.period_params(idx, rank[idx]).resolve(period);
                params.validate()?;
                Ok(params)
            })
            .collect::<Result<Vec<ResolvedParams>>>()?;

        let iterations = if periods.len() == 1 {
            1
        } else {
            self.iterations
        };

        let mut deseasonalized = match self.lambda {
            Some(lambda) => boxcox(series, lambda),
            None => series.to_vec(),
        };

        let n = series.len();
        let mut seasonality = vec![vec![T::zero(); n]; periods.len()];
        let mut trend = vec![T::zero(); n];

        for iteration in 0..iterations {
            for &idx in &order {
                if iteration > 0 {
                    for (d, &s) in deseasonalized.iter_mut().zip(seasonality[idx].iter()) {
                        *d = *d + s;
                    }
                }

                let fit = decompose(&deseasonalized, &plans[idx]);
                seasonality[idx] = fit.seasonal;
                trend = fit.trend;

                for (d, &s) in deseasonalized.iter_mut().zip(seasonality[idx].iter()) {
                    *d = *d - s;
                }
            }
        }

        let remainder = deseasonalized
            .iter()
            .zip(trend.iter())
            .map(|(&d, &t)| d - t)
            .collect();

        Ok(MSTLResult {
            seasonal_components: seasonality,
            seasonal_periods: periods.to_vec(),
            trend,
            remainder,
        })
    }

    fn validate(&self, len: usize, periods: &[usize]) -> Result<()> {
        if periods.is_empty() {
            return Err(DecompositionError::EmptyPeriods);
        }
        for &period in periods {
            if period < 2 {
                return Err(DecompositionError::PeriodsTooSmall);
            }
            if len / 2 < period {
                return Err(DecompositionError::SeriesTooShort);
            }
        }
        if let Some(lambda) = self.lambda {
            if !(0.0..=1.0).contains(&lambda) {
                return Err(DecompositionError::LambdaOutOfRange);
            }
        }
        if let Some(lengths) = &self.seasonal_lengths {
            if lengths.len() != periods.len() {
                return Err(DecompositionError::SeasonalLengthsMismatch);
            }
        }
        if periods.len() > 1 && self.iterations == 0 {
            return Err(DecompositionError::InvalidIterations);
        }
        Ok(())
    }

    /// STL settings for the period at `idx`, processed at position `rank`.
    fn period_params(&self, idx: usize, rank: usize) -> STLParams {
        let seasonal_length = match &self.seasonal_lengths {
            Some(lengths) => lengths[idx],
            None => self
                .stl_params
                .seasonal_length
                .unwrap_or(7 + 4 * (rank + 1)),
        };
        STLParams {
            seasonal_length: Some(seasonal_length),
            ..self.stl_params.clone()
        }
    }
}
