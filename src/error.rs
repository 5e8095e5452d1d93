//! Error types for incstats.
//!
//! The numerical kernels never fail on mathematical grounds: dividing by a
//! zero cumulative weight yields NaN or infinity just as plain float
//! arithmetic would. Errors are reserved for sizing contracts that would
//! otherwise read or write out of bounds.

use thiserror::Error;

/// The main error type for incstats operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A buffer or results slice is shorter than the requested order needs.
    ///
    /// An order-`p` accumulator needs `p + 1` slots and its finalized
    /// results need `p + 2` slots (moments `0..=p` followed by the mean).
    #[error("buffer too short: expected at least {expected} slots, found {found}")]
    BufferTooShort {
        /// Minimum number of slots required.
        expected: usize,
        /// Number of slots supplied.
        found: usize,
    },

    /// The requested central moment order is outside the supported range.
    #[error("invalid moment order {order}: must be between 2 and {max}")]
    InvalidOrder {
        /// The order that was requested.
        order: usize,
        /// Largest supported order.
        max: usize,
    },
}

/// Convenience type alias for Results using the incstats Error type.
pub type Result<T> = core::result::Result<T, Error>;
