//! Statistical utility functions.

use num_traits::Float;

/// Convert a count or position to the working float type.
///
/// Every `usize` is representable (possibly rounded) by `f32` and `f64`.
#[inline]
pub(crate) fn from_usize<T: Float>(value: usize) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Convert an `f64` constant to the working float type.
#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Calculate the mean of a slice.
///
/// # Example
/// ```
/// use anofox_stl::utils::mean;
///
/// assert!((mean(&[1.0, 2.0, 3.0]) - 2.0_f64).abs() < 1e-12);
/// ```
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::nan();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / from_usize(values.len())
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance<T: Float>(values: &[T]) -> T {
    if values.len() < 2 {
        return T::nan();
    }
    let m = mean(values);
    let sum_sq = values
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - m).powi(2));
    sum_sq / from_usize(values.len() - 1)
}

/// Share of the variability of `component + remainder` explained by the
/// component, `max(0, 1 - Var(remainder) / Var(component + remainder))`.
///
/// Returns 0 when the combined series has no variance.
pub fn strength<T: Float>(component: &[T], remainder: &[T]) -> T {
    let combined: Vec<T> = component
        .iter()
        .zip(remainder.iter())
        .map(|(&c, &r)| c + r)
        .collect();
    let var_combined = variance(&combined);

    if !(var_combined > constant(1e-10)) {
        return T::zero();
    }

    (T::one() - variance(remainder) / var_combined).max(T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_calculates_correctly() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-10);
        assert_relative_eq!(mean(&[10.0_f32]), 10.0, epsilon = 1e-6);
        assert!(mean::<f64>(&[]).is_nan());
    }

    #[test]
    fn variance_calculates_correctly() {
        // Sample variance of [1, 2, 3, 4, 5] = 2.5
        assert_relative_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.5, epsilon = 1e-10);
        assert_relative_eq!(variance(&[1.0_f32, 2.0, 3.0, 4.0, 5.0]), 2.5, epsilon = 1e-6);
        assert!(variance(&[1.0]).is_nan());
        assert!(variance::<f64>(&[]).is_nan());
    }

    #[test]
    fn strength_of_noise_free_component_is_one() {
        let component = [1.0, -1.0, 2.0, -2.0, 0.5];
        let remainder = [0.0; 5];
        assert_relative_eq!(strength(&component, &remainder), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn strength_is_zero_when_remainder_dominates() {
        let component = [0.0; 6];
        let remainder = [1.0, -3.0, 2.0, 0.5, -1.0, 4.0];
        assert_relative_eq!(strength(&component, &remainder), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn strength_is_floored_at_zero() {
        // component cancels half the remainder, so 1 - Var(r) / Var(c + r) = -3
        let remainder = [1.0, -3.0, 2.0, 0.5, -1.0, 4.0];
        let component: Vec<f64> = remainder.iter().map(|r| -0.5 * r).collect();
        assert_eq!(strength(&component, &remainder), 0.0);
    }

    #[test]
    fn strength_of_constant_series_is_zero() {
        let component = [2.0; 4];
        let remainder = [1.0; 4];
        assert_eq!(strength(&component, &remainder), 0.0);
    }

    #[test]
    fn conversions_are_exact_for_small_values() {
        assert_eq!(from_usize::<f64>(7), 7.0);
        assert_eq!(from_usize::<f32>(30), 30.0);
        assert_eq!(constant::<f32>(0.5), 0.5);
    }
}
