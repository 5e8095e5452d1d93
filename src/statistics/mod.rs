//! Weighted moments for streaming data
//!
//! This module computes weighted mean, variance, skewness, kurtosis and
//! central moments of any order up to [`MAX_ORDER`] in a single pass with
//! constant memory.
//!
//! Two layers are provided:
//!
//! - [`kernel`]: `update_*` / `finalize_*` functions over caller-owned
//!   `f64` buffers, for embedding the accumulator state in your own types.
//! - Typed accumulators ([`WeightedMean`], [`WeightedVariance`],
//!   [`WeightedSkewness`], [`WeightedKurtosis`], [`CentralMoments`]) that own
//!   their buffer and implement [`Accumulator`](crate::traits::Accumulator).
//!
//! # Example
//!
//! ```
//! use incstats::statistics::WeightedKurtosis;
//! use incstats::traits::Accumulator;
//!
//! let mut stats = WeightedKurtosis::new();
//!
//! for (value, weight) in [(1.0, 0.5), (2.0, 1.0), (3.0, 1.0), (4.0, 2.0)] {
//!     stats.update(value, weight);
//! }
//!
//! let summary = stats.summary().unwrap();
//! println!("Mean: {}", summary.mean);
//! println!("Variance: {}", summary.variance);
//! println!("Skewness: {}", summary.skewness);
//! println!("Kurtosis: {}", summary.kurtosis);
//! ```

mod central;
pub mod kernel;
mod moments;

pub use central::{CentralMomentSummary, CentralMoments};
pub use kernel::MAX_ORDER;
pub use moments::{
    KurtosisSummary, SkewnessSummary, VarianceSummary, WeightedKurtosis, WeightedMean,
    WeightedSkewness, WeightedVariance,
};
