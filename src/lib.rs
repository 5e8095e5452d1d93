//! # Incstats
//!
//! Incremental weighted statistics for Rust.
//!
//! Incstats computes weighted mean, variance, skewness, kurtosis and central
//! moments of arbitrary order over a stream of samples without storing the
//! samples. Each update folds one `(value, weight)` pair into a small
//! fixed-size accumulator; finalizing reads the accumulator without touching
//! it, so statistics can be inspected at any point and updates resumed.
//!
//! ## Features
//!
//! - **Numerically stable**: Welford-style incremental deviations, not
//!   naive sums of powers
//! - **Weighted**: every sample carries a non-negative weight; a zero weight
//!   is a no-op
//! - **Arbitrary order**: central moments up to order 32 through one
//!   recurrence
//! - **Allocation free**: the buffer kernels work on caller-owned storage
//!
//! ## Quick Start
//!
//! ```rust
//! use incstats::prelude::*;
//!
//! let mut stats = WeightedVariance::new();
//! for (value, weight) in [(1.0, 1.0), (2.0, 2.0), (4.0, 1.0)] {
//!     stats.update(value, weight);
//! }
//!
//! let summary = stats.summary().unwrap();
//! println!("mean = {}, variance = {}", summary.mean, summary.variance);
//! ```
//!
//! ## Caller-owned buffers
//!
//! The [`statistics::kernel`] functions expose the raw recurrence over plain
//! arrays and slices:
//!
//! ```rust
//! use incstats::statistics::kernel;
//!
//! let order = 6;
//! let mut buffer = [0.0; 7];
//! for x in [0.5, 1.5, 2.0, 4.0] {
//!     kernel::update_central_moment(x, 1.0, &mut buffer, order).unwrap();
//! }
//!
//! let mut results = [0.0; 8];
//! kernel::finalize_central_moment(&mut results, &buffer, order, true).unwrap();
//! assert_eq!(results[0], 1.0);
//! assert!((results[2] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it float math
//!   comes from `libm`
//! - `serde`: Enable serialization of finalized summaries

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod extremum;
pub mod primitives;
pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::extremum::{track_max, track_min, Extrema};
    pub use crate::statistics::{
        CentralMomentSummary, CentralMoments, KurtosisSummary, SkewnessSummary, VarianceSummary,
        WeightedKurtosis, WeightedMean, WeightedSkewness, WeightedVariance,
    };
    pub use crate::traits::*;
}

pub use error::{Error, Result};
pub use extremum::Extrema;
pub use statistics::{CentralMoments, WeightedKurtosis, WeightedMean, WeightedSkewness, WeightedVariance};
