//! STL (Seasonal-Trend decomposition using LOESS) implementation.
//!
//! STL decomposes a time series into three components:
//! - Trend: The underlying long-term pattern
//! - Seasonal: The repeating seasonal pattern
//! - Remainder: The residual after removing trend and seasonal
//!
//! The procedure follows Cleveland, Cleveland, McRae & Terpenning (1990),
//! "STL: A Seasonal-Trend Decomposition Procedure Based on Loess".

use num_traits::Float;

use super::cycle::{smooth_cycle_subseries, SubseriesWindow};
use super::filter::low_pass;
use super::loess::smooth;
use super::params::{ResolvedParams, STLParams};
use super::robust::robustness_weights;
use crate::error::{DecompositionError, Result};
use crate::utils::stats::strength;

/// Result of STL decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct STLResult<T> {
    /// Seasonal component.
    pub seasonal: Vec<T>,
    /// Trend component.
    pub trend: Vec<T>,
    /// Remainder component, `series - seasonal - trend`.
    pub remainder: Vec<T>,
    /// Robustness weights of the last outer iteration (all ones without
    /// robustness iterations).
    pub weights: Vec<T>,
}

impl<T: Float> STLResult<T> {
    /// Get the seasonal strength (0 to 1).
    /// Values close to 1 indicate strong seasonality.
    pub fn seasonal_strength(&self) -> T {
        strength(&self.seasonal, &self.remainder)
    }

    /// Get the trend strength (0 to 1).
    /// Values close to 1 indicate strong trend.
    pub fn trend_strength(&self) -> T {
        strength(&self.trend, &self.remainder)
    }
}

impl STLParams {
    /// Decompose `series` with seasonal period `period`.
    ///
    /// # Errors
    /// Returns a [`DecompositionError`] when the series covers fewer than two
    /// periods or the resolved configuration is invalid. Nothing is computed
    /// in that case.
    ///
    /// # Example
    /// ```
    /// use anofox_stl::seasonality::STLParams;
    ///
    /// let series: Vec<f64> = (0..48).map(|i| (i % 12) as f64 + 0.1 * i as f64).collect();
    /// let result = STLParams::default().fit(&series, 12).unwrap();
    /// assert_eq!(result.trend.len(), series.len());
    /// ```
    pub fn fit<T: Float>(&self, series: &[T], period: usize) -> Result<STLResult<T>> {
        if series.len() / 2 < period {
            return Err(DecompositionError::SeriesTooShort);
        }

        let params = self.resolve(period);
        params.validate()?;

        Ok(decompose(series, &params))
    }
}

/// Run the outer robustness loop on validated settings.
pub(crate) fn decompose<T: Float>(series: &[T], params: &ResolvedParams) -> STLResult<T> {
    let n = series.len();
    let mut engine = InnerLoop::new(n, params);
    let mut seasonal = vec![T::zero(); n];
    let mut trend = vec![T::zero(); n];
    // Stays all ones unless a robustness iteration runs
    let mut weights = vec![T::one(); n];
    let mut robust = false;

    let mut pass = 0;
    loop {
        engine.run(
            series,
            robust.then_some(&weights[..]),
            &mut seasonal,
            &mut trend,
        );
        pass += 1;
        if pass > params.outer_loops {
            break;
        }

        let fit: Vec<T> = trend
            .iter()
            .zip(seasonal.iter())
            .map(|(&t, &s)| t + s)
            .collect();
        weights = robustness_weights(series, &fit);
        robust = true;
    }

    let remainder = series
        .iter()
        .zip(seasonal.iter())
        .zip(trend.iter())
        .map(|((&y, &s), &t)| y - s - t)
        .collect();

    STLResult {
        seasonal,
        trend,
        remainder,
        weights,
    }
}

/// Working buffers for the inner loop, owned by a single fit.
struct InnerLoop<'a, T> {
    params: &'a ResolvedParams,
    work: Vec<T>,
    extended: Vec<T>,
    low_pass: Vec<T>,
    scratch: Vec<T>,
}

impl<'a, T: Float> InnerLoop<'a, T> {
    fn new(n: usize, params: &'a ResolvedParams) -> Self {
        Self {
            params,
            work: vec![T::zero(); n],
            extended: vec![T::zero(); n + 2 * params.period],
            low_pass: vec![T::zero(); n],
            scratch: vec![T::zero(); n],
        }
    }

    /// Run `inner_loops` passes, updating `seasonal` and `trend` in place.
    fn run(
        &mut self,
        series: &[T],
        robustness: Option<&[T]>,
        seasonal: &mut [T],
        trend: &mut [T],
    ) {
        let p = self.params;
        let window = SubseriesWindow {
            length: p.seasonal_length,
            degree: p.seasonal_degree,
            jump: p.seasonal_jump,
        };

        for _ in 0..p.inner_loops {
            // Step 1: Detrending
            for ((w, &y), &t) in self.work.iter_mut().zip(series).zip(trend.iter()) {
                *w = y - t;
            }

            // Step 2: Cycle-subseries smoothing
            smooth_cycle_subseries(&self.work, p.period, window, robustness, &mut self.extended);

            // Step 3: Low-pass filtering of the smoothed cycle-subseries
            let filtered = low_pass(&self.extended, p.period);
            smooth(
                &filtered,
                p.low_pass_length,
                p.low_pass_degree,
                p.low_pass_jump,
                None,
                &mut self.low_pass,
                &mut self.scratch,
            );

            // Step 4: Detrending of the smoothed cycle-subseries
            for (i, s) in seasonal.iter_mut().enumerate() {
                *s = self.extended[p.period + i] - self.low_pass[i];
            }

            // Step 5: Deseasonalizing
            for ((w, &y), &s) in self.work.iter_mut().zip(series).zip(seasonal.iter()) {
                *w = y - s;
            }

            // Step 6: Trend smoothing
            smooth(
                &self.work,
                p.trend_length,
                p.trend_degree,
                p.trend_jump,
                robustness,
                trend,
                &mut self.scratch,
            );
        }
    }
}
