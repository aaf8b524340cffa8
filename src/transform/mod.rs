//! Data transformations applied before decomposition.
//!
//! # Example
//!
//! ```
//! use anofox_stl::transform::{boxcox, inv_boxcox};
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let transformed = boxcox(&series, 0.5);
//! let restored = inv_boxcox(&transformed, 0.5);
//! assert!((restored[4] - 5.0_f64).abs() < 1e-12);
//! ```

pub mod boxcox;

pub use boxcox::{boxcox, inv_boxcox, LAMBDA_TOLERANCE};
