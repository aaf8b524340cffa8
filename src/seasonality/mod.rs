//! Seasonal-trend decomposition.
//!
//! This module provides:
//! - STL: Seasonal-Trend decomposition using LOESS
//! - MSTL: Multiple seasonal-trend decomposition for multiple periods
//!
//! The building blocks (tricube local regression, cycle-subseries smoothing,
//! the moving-average low-pass filter and bisquare robustness weights) are
//! internal to the decomposition drivers.

mod cycle;
mod filter;
mod loess;
mod mstl;
mod params;
mod robust;
mod stl;

pub use mstl::{MSTLParams, MSTLResult};
pub use params::{ResolvedParams, STLParams};
pub use stl::STLResult;
