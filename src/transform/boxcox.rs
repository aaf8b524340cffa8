//! Box-Cox power transformation.
//!
//! Stabilises the variance of a series before decomposition.

use num_traits::Float;

use crate::utils::stats::constant;

/// Lambda values closer to zero than this select the log transform.
pub const LAMBDA_TOLERANCE: f64 = 1e-4;

/// Apply Box-Cox transformation with a given lambda.
///
/// For lambda != 0: y = (x^lambda - 1) / lambda
/// For lambda == 0: y = ln(x)
///
/// Values outside the domain of the transform (non-positive values for the
/// log, negative values for fractional powers) come out as NaN or infinite.
///
/// # Example
/// ```
/// use anofox_stl::transform::boxcox;
///
/// let out = boxcox(&[1.0, 4.0], 0.5);
/// assert!((out[1] - 2.0_f64).abs() < 1e-12);
/// ```
pub fn boxcox<T: Float>(series: &[T], lambda: f64) -> Vec<T> {
    if lambda.abs() < LAMBDA_TOLERANCE {
        return series.iter().map(|&x| x.ln()).collect();
    }
    let l = constant::<T>(lambda);
    series
        .iter()
        .map(|&x| (x.powf(l) - T::one()) / l)
        .collect()
}

/// Inverse Box-Cox transformation.
///
/// For lambda != 0: x = (lambda * y + 1)^(1/lambda)
/// For lambda == 0: x = exp(y)
pub fn inv_boxcox<T: Float>(transformed: &[T], lambda: f64) -> Vec<T> {
    if lambda.abs() < LAMBDA_TOLERANCE {
        return transformed.iter().map(|&y| y.exp()).collect();
    }
    let l = constant::<T>(lambda);
    transformed
        .iter()
        .map(|&y| {
            let val = l * y + T::one();
            if val < T::zero() {
                T::nan()
            } else {
                val.powf(T::one() / l)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn boxcox_lambda_zero_is_log() {
        let data = vec![1.0, std::f64::consts::E, 10.0];
        let out = boxcox(&data, 0.0);
        assert_relative_eq!(out[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(out[2], 10.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn boxcox_tiny_lambda_is_treated_as_zero() {
        let data = vec![2.0_f32, 5.0];
        let out = boxcox(&data, 5e-5);
        assert_relative_eq!(out[0], 2.0_f32.ln(), epsilon = 1e-6);
        assert_relative_eq!(out[1], 5.0_f32.ln(), epsilon = 1e-6);
    }

    #[test]
    fn boxcox_lambda_one_shifts_by_one() {
        let data = vec![0.0, 1.0, 5.5];
        let out = boxcox(&data, 1.0);
        assert_eq!(out, vec![-1.0, 0.0, 4.5]);
    }

    #[test]
    fn boxcox_maps_zero_to_negative_reciprocal() {
        let out = boxcox(&[0.0], 0.5);
        assert_relative_eq!(out[0], -2.0, epsilon = 1e-12);
    }

    #[test]
    fn boxcox_log_of_zero_is_infinite() {
        let out = boxcox(&[0.0], 0.0);
        assert!(out[0].is_infinite() && out[0] < 0.0);
    }

    #[test]
    fn inverse_recovers_original() {
        let data = vec![0.5, 1.0, 3.0, 8.0, 20.0];
        for lambda in [0.0, 0.25, 0.5, 1.0] {
            let back = inv_boxcox(&boxcox(&data, lambda), lambda);
            for (a, b) in data.iter().zip(back.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn inverse_outside_domain_is_nan() {
        let out = inv_boxcox(&[-5.0], 0.5);
        assert!(out[0].is_nan());
    }
}
