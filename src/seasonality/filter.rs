//! Moving averages and the STL low-pass filter.

use num_traits::Float;

use crate::utils::stats::from_usize;

/// Trailing moving average with window `window`.
///
/// The first window is summed once and then updated incrementally, so the
/// output has `values.len() - window + 1` elements. Returns an empty vector
/// when the window is empty or longer than the input.
pub(crate) fn moving_average<T: Float>(values: &[T], window: usize) -> Vec<T> {
    if window == 0 || window > values.len() {
        return Vec::new();
    }

    let count = values.len() - window + 1;
    let width = from_usize::<T>(window);
    let mut averages = Vec::with_capacity(count);

    let mut sum = values[..window].iter().fold(T::zero(), |acc, &v| acc + v);
    averages.push(sum / width);
    for j in 1..count {
        sum = sum - values[j - 1] + values[j + window - 1];
        averages.push(sum / width);
    }

    averages
}

/// Chain of moving averages of widths `period`, `period` and 3.
///
/// Shortens the input by `2 * period` elements.
pub(crate) fn low_pass<T: Float>(values: &[T], period: usize) -> Vec<T> {
    let first = moving_average(values, period);
    let second = moving_average(&first, period);
    moving_average(&second, 3)
}
