//! Tricube-weighted local regression and jump-sampled LOESS smoothing.
//!
//! Positions are 0-based throughout. A query position may lie outside the
//! data (the cycle-subseries smoother extrapolates one step past each end),
//! so it is carried as a float.

use num_traits::Float;

use crate::utils::stats::{constant, from_usize};

/// Fit a degree-0 or degree-1 local polynomial at position `xs`.
///
/// Only `y[left..=right]` contributes. `len` is the nominal smoothing window;
/// when it exceeds `y.len()` the bandwidth is widened by half the excess.
/// `weights` is scratch space of at least `y.len()` elements. `robustness`
/// multiplies the tricube weights when supplied.
///
/// Returns `None` when every weight in the window is zero, in which case the
/// caller substitutes an observed value.
#[allow(clippy::too_many_arguments)]
pub(crate) fn estimate<T: Float>(
    y: &[T],
    len: usize,
    degree: usize,
    xs: T,
    left: usize,
    right: usize,
    weights: &mut [T],
    robustness: Option<&[T]>,
) -> Option<T> {
    let n = y.len();
    let range = from_usize::<T>(n) - T::one();
    let mut h = (xs - from_usize(left)).max(from_usize::<T>(right) - xs);

    if len > n {
        h = h + from_usize((len - n) / 2);
    }

    let h9 = constant::<T>(0.999) * h;
    let h1 = constant::<T>(0.001) * h;

    // Sums accumulate in T, so f32 fits carry f32 rounding throughout
    let mut total = T::zero();
    for j in left..=right {
        weights[j] = T::zero();
        let r = (from_usize::<T>(j) - xs).abs();
        if r <= h9 {
            weights[j] = if r <= h1 {
                T::one()
            } else {
                (T::one() - (r / h).powi(3)).powi(3)
            };
            if let Some(rw) = robustness {
                weights[j] = weights[j] * rw[j];
            }
            total = total + weights[j];
        }
    }

    if total <= T::zero() {
        return None;
    }

    for w in &mut weights[left..=right] {
        *w = *w / total;
    }

    if h > T::zero() && degree > 0 {
        // Weighted centre of the positions
        let mut center = T::zero();
        for j in left..=right {
            center = center + weights[j] * from_usize(j);
        }
        let mut slope = xs - center;
        let mut spread = T::zero();
        for j in left..=right {
            spread = spread + weights[j] * (from_usize::<T>(j) - center).powi(2);
        }
        if spread.sqrt() > constant::<T>(0.001) * range {
            slope = slope / spread;
            for j in left..=right {
                weights[j] = weights[j] * (slope * (from_usize::<T>(j) - center) + T::one());
            }
        }
    }

    let mut fit = T::zero();
    for j in left..=right {
        fit = fit + weights[j] * y[j];
    }
    Some(fit)
}

/// LOESS-smooth `y` into `out` (both of length `n`).
///
/// The local fit is evaluated at every `jump`-th position (the stride is
/// clamped to `n - 1`) and skipped positions are linearly interpolated. The
/// last position is always evaluated directly. Positions whose fit
/// degenerates keep their observed value. `scratch` needs `n` elements.
#[allow(clippy::too_many_arguments)]
pub(crate) fn smooth<T: Float>(
    y: &[T],
    len: usize,
    degree: usize,
    jump: usize,
    robustness: Option<&[T]>,
    out: &mut [T],
    scratch: &mut [T],
) {
    let n = y.len();
    if n == 0 {
        return;
    }
    if n < 2 {
        out[0] = y[0];
        return;
    }

    let stride = jump.min(n - 1);
    let mut left = 0;
    let mut right = 0;

    let mut fit_at = |i: usize, left: usize, right: usize, out: &mut [T]| {
        out[i] = estimate(y, len, degree, from_usize(i), left, right, scratch, robustness)
            .unwrap_or(y[i]);
    };

    if len >= n {
        right = n - 1;
        for i in (0..n).step_by(stride) {
            fit_at(i, left, right, out);
        }
    } else if stride == 1 {
        let half = (len + 1) / 2;
        right = len - 1;
        for i in 0..n {
            if i + 1 > half && right != n - 1 {
                left += 1;
                right += 1;
            }
            fit_at(i, left, right, out);
        }
    } else {
        let half = (len + 1) / 2;
        for i in (0..n).step_by(stride) {
            if i + 1 < half {
                left = 0;
                right = len - 1;
            } else if i >= n - half {
                left = n - len;
                right = n - 1;
            } else {
                left = i + 1 - half;
                right = len + i - half;
            }
            fit_at(i, left, right, out);
        }
    }

    if stride == 1 {
        return;
    }

    let step = from_usize::<T>(stride);
    for i in (0..n - stride).step_by(stride) {
        let delta = (out[i + stride] - out[i]) / step;
        for j in i + 1..i + stride {
            out[j] = out[i] + delta * from_usize(j - i);
        }
    }

    // Trailing partial stride
    let last = ((n - 1) / stride) * stride;
    if last != n - 1 {
        fit_at(n - 1, left, right, out);
        if last != n - 2 {
            let delta = (out[n - 1] - out[last]) / from_usize(n - 1 - last);
            for j in last + 1..n - 1 {
                out[j] = out[last] + delta * from_usize(j - last);
            }
        }
    }
}
