//! Core traits for streaming moment accumulators
//!
//! Every typed accumulator wraps one of the buffers from
//! [`statistics::kernel`](crate::statistics::kernel) and implements
//! [`Accumulator`], so callers can feed samples and read summaries without
//! knowing the slot layout.

use core::fmt::Debug;

/// Core trait for all weighted moment accumulators
pub trait Accumulator: Clone + Debug {
    /// Finalized statistics derived from the accumulator
    type Summary;

    /// Fold a sample with the given non-negative weight
    ///
    /// Negative weights are not rejected, but they break the assumptions
    /// the moment formulas rely on.
    fn update(&mut self, value: f64, weight: f64);

    /// Fold a sample with unit weight
    fn add(&mut self, value: f64) {
        self.update(value, 1.0);
    }

    /// Fold every `(value, weight)` pair from an iterator
    fn extend_weighted<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        for (value, weight) in samples {
            self.update(value, weight);
        }
    }

    /// Derive the current statistics
    ///
    /// Returns `None` while the cumulative weight is zero. Never modifies
    /// the accumulator, so it can be called between any two updates.
    fn summary(&self) -> Option<Self::Summary>;

    /// Raw accumulator slots: `[weight, mean, M2, ..]`
    fn buffer(&self) -> &[f64];

    /// Reset to the empty state
    fn clear(&mut self);

    /// Sum of all weights seen so far
    fn total_weight(&self) -> f64 {
        self.buffer()[0]
    }

    /// Running weighted mean, `None` while empty
    fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.buffer()[1])
        }
    }

    /// Check if no weight has been accumulated
    fn is_empty(&self) -> bool {
        self.total_weight() == 0.0
    }

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;
}
