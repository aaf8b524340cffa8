//! Bisquare robustness weights for the outer STL loop.

use num_traits::Float;

use crate::utils::stats::constant;

/// Compute bisquare weights from the residuals `|y - fit|`.
///
/// The scale is `cmad = 6 * median(|residuals|)`, taken as three times the
/// sum of the two middle order statistics.
///
/// ```text
/// w = 1                      if r <= 0.001 * cmad
/// w = (1 - (r / cmad)^2)^2   if r <= 0.999 * cmad
/// w = 0                      otherwise
/// ```
pub(crate) fn robustness_weights<T: Float>(y: &[T], fit: &[T]) -> Vec<T> {
    let n = y.len();
    if n == 0 {
        return Vec::new();
    }

    let residuals: Vec<T> = y
        .iter()
        .zip(fit.iter())
        .map(|(&v, &f)| (v - f).abs())
        .collect();

    let mut sorted = residuals.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let cmad = constant::<T>(3.0) * (sorted[(n - 1) / 2] + sorted[n / 2]);
    let c9 = constant::<T>(0.999) * cmad;
    let c1 = constant::<T>(0.001) * cmad;

    residuals
        .into_iter()
        .map(|r| {
            if r <= c1 {
                T::one()
            } else if r <= c9 {
                (T::one() - (r / cmad).powi(2)).powi(2)
            } else {
                T::zero()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_fit_gets_full_weight() {
        let y = [1.0, 2.0, 3.0];
        let weights = robustness_weights(&y, &y);
        assert_eq!(weights, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn outlier_is_rejected() {
        let y = [0.0, 1.0, -1.0, 1.0, -1.0, 50.0];
        let fit = [0.0; 6];
        let weights = robustness_weights(&y, &fit);
        // sorted |r| = [0, 1, 1, 1, 1, 50], cmad = 3 * (1 + 1) = 6
        assert_eq!(weights[0], 1.0);
        let expected = (1.0 - (1.0_f64 / 6.0).powi(2)).powi(2);
        for &w in &weights[1..5] {
            assert_relative_eq!(w, expected, epsilon = 1e-12);
        }
        assert_eq!(weights[5], 0.0);
    }

    #[test]
    fn odd_length_uses_single_median() {
        let y = [2.0_f32, -2.0, 4.0];
        let fit = [0.0_f32; 3];
        let weights = robustness_weights(&y, &fit);
        // median |r| = 2, cmad = 12
        let expected = (1.0 - (2.0_f32 / 12.0).powi(2)).powi(2);
        assert_relative_eq!(weights[0], expected, epsilon = 1e-6);
        assert_relative_eq!(weights[1], expected, epsilon = 1e-6);
        let expected = (1.0 - (4.0_f32 / 12.0).powi(2)).powi(2);
        assert_relative_eq!(weights[2], expected, epsilon = 1e-6);
    }

    #[test]
    fn weights_stay_in_unit_interval() {
        let y: Vec<f64> = (0..25).map(|i| ((i * 7) % 11) as f64).collect();
        let fit: Vec<f64> = (0..25).map(|i| i as f64 * 0.4).collect();
        for w in robustness_weights(&y, &fit) {
            assert!((0.0..=1.0).contains(&w));
        }
    }
}
