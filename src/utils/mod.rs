//! Utility functions shared by the decomposition routines.

pub mod stats;

pub use stats::{mean, strength, variance};
