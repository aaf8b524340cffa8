//! Cycle-subseries smoothing.
//!
//! Each phase of the seasonal cycle (all Mondays, all Januaries, ...) is
//! smoothed on its own and extended by one extrapolated value at each end.
//! The phases are then interleaved back into a buffer that is `2 * period`
//! longer than the input.

use num_traits::Float;

use super::loess::{estimate, smooth};
use crate::utils::stats::from_usize;

/// Smoothing settings for the cycle subseries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SubseriesWindow {
    pub length: usize,
    pub degree: usize,
    pub jump: usize,
}

/// Smooth every cycle subseries of `y` and write the extended result into
/// `season` (length `y.len() + 2 * period`).
pub(crate) fn smooth_cycle_subseries<T: Float>(
    y: &[T],
    period: usize,
    window: SubseriesWindow,
    robustness: Option<&[T]>,
    season: &mut [T],
) {
    let n = y.len();
    let capacity = n / period + 3;
    let mut values = Vec::with_capacity(capacity);
    let mut weights = Vec::with_capacity(capacity);
    let mut smoothed = vec![T::zero(); capacity];
    let mut scratch = vec![T::zero(); capacity];

    for phase in 0..period {
        values.clear();
        values.extend(y.iter().skip(phase).step_by(period).copied());
        let k = values.len();

        let sub_weights = match robustness {
            Some(rw) => {
                weights.clear();
                weights.extend(rw.iter().skip(phase).step_by(period).copied());
                Some(&weights[..])
            }
            None => None,
        };

        smooth(
            &values,
            window.length,
            window.degree,
            window.jump,
            sub_weights,
            &mut smoothed[1..=k],
            &mut scratch,
        );

        // One step before the first observation
        let right = window.length.min(k) - 1;
        smoothed[0] = estimate(
            &values,
            window.length,
            window.degree,
            -T::one(),
            0,
            right,
            &mut scratch,
            sub_weights,
        )
        .unwrap_or(smoothed[1]);

        // One step after the last observation
        let left = k.saturating_sub(window.length);
        smoothed[k + 1] = estimate(
            &values,
            window.length,
            window.degree,
            from_usize(k),
            left,
            k - 1,
            &mut scratch,
            sub_weights,
        )
        .unwrap_or(smoothed[k]);

        for (m, &value) in smoothed[..k + 2].iter().enumerate() {
            season[m * period + phase] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn window(length: usize, degree: usize) -> SubseriesWindow {
        SubseriesWindow {
            length,
            degree,
            jump: length.div_ceil(10),
        }
    }

    #[test]
    fn extended_buffer_repeats_a_fixed_pattern() {
        let period = 4;
        let pattern = [1.0, -2.0, 3.0, 0.5];
        let y: Vec<f64> = (0..22).map(|i| pattern[i % period]).collect();
        let mut season = vec![f64::NAN; y.len() + 2 * period];

        smooth_cycle_subseries(&y, period, window(7, 1), None, &mut season);

        for (i, &s) in season.iter().enumerate() {
            assert_relative_eq!(s, pattern[i % period], epsilon = 1e-10);
        }
    }

    #[test]
    fn linear_subseries_are_extrapolated() {
        let period = 3;
        // Each phase grows linearly across cycles
        let y: Vec<f64> = (0..15)
            .map(|i| (i % period) as f64 * 10.0 + (i / period) as f64)
            .collect();
        let mut season = vec![0.0; y.len() + 2 * period];

        smooth_cycle_subseries(&y, period, window(5, 1), None, &mut season);

        for phase in 0..period {
            // Extended position m maps to cycle m - 1
            for m in 0..7 {
                let expected = phase as f64 * 10.0 + m as f64 - 1.0;
                assert_relative_eq!(season[m * period + phase], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn uneven_phase_lengths_fill_the_whole_buffer() {
        let period = 7;
        let y: Vec<f64> = (0..30).map(|i| (i % period) as f64).collect();
        let mut season = vec![f64::NAN; y.len() + 2 * period];

        smooth_cycle_subseries(&y, period, window(7, 0), None, &mut season);

        assert!(season.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn zero_robustness_weights_fall_back_to_observations() {
        let period = 2;
        let y = [1.0, 5.0, 2.0, 6.0, 3.0, 7.0];
        let rw = [0.0; 6];
        let mut season = vec![f64::NAN; y.len() + 2 * period];

        smooth_cycle_subseries(&y, period, window(3, 1), Some(&rw), &mut season);

        // Interior keeps the observations, extrapolated ends copy their neighbour
        assert_eq!(season, vec![1.0, 5.0, 1.0, 5.0, 2.0, 6.0, 3.0, 7.0, 3.0, 7.0]);
    }
}
