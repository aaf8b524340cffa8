//! # anofox-stl
//!
//! Seasonal-trend decomposition of regularly sampled time series using LOESS.
//!
//! Provides classical STL (Cleveland et al., 1990) with optional robustness
//! iterations, the multi-seasonal MSTL extension for series with several
//! superimposed periodicities, and the Box-Cox power transform used to
//! stabilise variance before decomposition. Every routine is generic over
//! `f32` and `f64`.
//!
//! ```
//! use anofox_stl::prelude::*;
//!
//! let series: Vec<f64> = vec![
//!     5.0, 9.0, 2.0, 9.0, 0.0, 6.0, 3.0, 8.0, 5.0, 8.0,
//!     7.0, 8.0, 8.0, 0.0, 2.0, 5.0, 0.0, 5.0, 6.0, 7.0,
//!     3.0, 6.0, 1.0, 4.0, 4.0, 4.0, 3.0, 7.0, 5.0, 8.0,
//! ];
//!
//! let result = STLParams::default().fit(&series, 7)?;
//! assert!((result.seasonal[0] - 0.369).abs() < 1e-3);
//!
//! let multi = MSTLParams::default().fit(&series, &[6, 10])?;
//! assert_eq!(multi.seasonal_components.len(), 2);
//! # Ok::<(), anofox_stl::DecompositionError>(())
//! ```

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod seasonality;
pub mod transform;
pub mod utils;

pub use error::{Component, DecompositionError, Result};

pub mod prelude {
    pub use crate::error::{DecompositionError, Result};
    pub use crate::seasonality::{MSTLParams, MSTLResult, STLParams, STLResult};
    pub use crate::transform::{boxcox, inv_boxcox};
}
