//! Running weighted central moments of arbitrary order
//!
//! [`CentralMoments`] keeps `order + 1` slots and updates every moment up to
//! the requested order in O(order²) per sample. Finalizing yields raw
//! central moments `m_k = M_k / W` or standardized moments `m_k / σ^k`.

use crate::error::{Error, Result};
use crate::statistics::kernel::{self, MAX_ORDER};
use crate::traits::Accumulator;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Finalized central moments of orders `0..=p` and the mean
#[derive(Clone, Debug, PartialEq)]
pub struct CentralMomentSummary {
    /// Moments indexed by order; `moments[0]` is 1 and `moments[1]` is 0
    pub moments: Vec<f64>,
    /// Weighted mean
    pub mean: f64,
    /// Whether `moments` were divided by `σ^k`
    pub standardized: bool,
}

impl CentralMomentSummary {
    /// Highest order held in the summary
    pub fn order(&self) -> usize {
        self.moments.len() - 1
    }

    /// Moment of order `k`, `None` past the accumulator's order
    pub fn moment(&self, k: usize) -> Option<f64> {
        self.moments.get(k).copied()
    }
}

/// Running weighted central moments up to a configurable order
///
/// # Example
///
/// ```
/// use incstats::statistics::CentralMoments;
/// use incstats::traits::Accumulator;
///
/// let mut moments = CentralMoments::new(4).unwrap();
/// for value in [-3.0, -1.0, 0.0, 1.0, 3.0] {
///     moments.add(value);
/// }
///
/// let raw = moments.summary().unwrap();
/// assert!((raw.moments[2] - 4.0).abs() < 1e-12);
///
/// let standardized = moments.standardized().unwrap();
/// assert!((standardized.moments[4] - 2.05).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CentralMoments {
    order: usize,
    /// `[weight, mean, M2, .., M_order]`
    buffer: Vec<f64>,
}

impl CentralMoments {
    /// Create an accumulator for central moments up to `order`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOrder`] unless `2 <= order <= MAX_ORDER`.
    pub fn new(order: usize) -> Result<Self> {
        kernel::check_order(order)?;
        tracing::debug!(order, "creating central moment accumulator");
        Ok(Self {
            order,
            buffer: vec![0.0; order + 1],
        })
    }

    /// Highest moment order tracked
    pub fn order(&self) -> usize {
        self.order
    }

    /// Write moments `0..=order` followed by the mean into `results`
    ///
    /// Does not allocate. `results` must hold at least `order + 2` slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if `results` is too small.
    pub fn finalize_into(&self, results: &mut [f64], standardize: bool) -> Result<()> {
        let expected = self.order + 2;
        kernel::check_len(expected, results.len())?;
        kernel::derive(&mut results[..expected], &self.buffer, standardize);
        Ok(())
    }

    /// Standardized moments `m_k / σ^k`, `None` while empty
    ///
    /// Orders 3 and 4 match the skewness and kurtosis of
    /// [`WeightedKurtosis`](crate::statistics::WeightedKurtosis).
    pub fn standardized(&self) -> Option<CentralMomentSummary> {
        self.finalize(true)
    }

    fn finalize(&self, standardize: bool) -> Option<CentralMomentSummary> {
        if self.is_empty() {
            return None;
        }
        let mut results = vec![0.0; self.order + 2];
        kernel::derive(&mut results, &self.buffer, standardize);
        let mean = results.pop()?;
        Some(CentralMomentSummary {
            moments: results,
            mean,
            standardized: standardize,
        })
    }
}

impl Accumulator for CentralMoments {
    type Summary = CentralMomentSummary;

    fn update(&mut self, value: f64, weight: f64) {
        kernel::accumulate(value, weight, &mut self.buffer);
    }

    /// Raw central moments `M_k / W`
    fn summary(&self) -> Option<CentralMomentSummary> {
        self.finalize(false)
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn clear(&mut self) {
        self.buffer.fill(0.0);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.buffer.capacity() * core::mem::size_of::<f64>()
    }
}

impl TryFrom<usize> for CentralMoments {
    type Error = Error;

    fn try_from(order: usize) -> Result<Self> {
        Self::new(order)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CentralMomentSummary {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("CentralMomentSummary", 3)?;
        state.serialize_field("moments", &self.moments)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("standardized", &self.standardized)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::{WeightedKurtosis, WeightedVariance};

    const DATA: [(f64, f64); 6] = [
        (0.3, 1.0),
        (1.7, 0.4),
        (2.2, 2.5),
        (-0.8, 0.9),
        (5.1, 0.2),
        (1.1, 1.3),
    ];

    #[test]
    fn test_new_validates_order() {
        assert!(CentralMoments::new(2).is_ok());
        assert!(CentralMoments::new(MAX_ORDER).is_ok());
        assert_eq!(
            CentralMoments::new(0),
            Err(Error::InvalidOrder {
                order: 0,
                max: MAX_ORDER
            })
        );
        assert!(CentralMoments::try_from(MAX_ORDER + 1).is_err());
    }

    #[test]
    fn test_empty() {
        let moments = CentralMoments::new(5).unwrap();
        assert!(moments.is_empty());
        assert_eq!(moments.summary(), None);
        assert_eq!(moments.standardized(), None);
        assert_eq!(moments.buffer().len(), 6);
    }

    #[test]
    fn test_order_two_matches_variance() {
        let mut moments = CentralMoments::new(2).unwrap();
        let mut variance = WeightedVariance::new();
        moments.extend_weighted(DATA);
        variance.extend_weighted(DATA);

        let raw = moments.summary().unwrap();
        let expected = variance.summary().unwrap();
        assert_eq!(raw.order(), 2);
        assert!((raw.mean - expected.mean).abs() < 1e-12);
        assert!((raw.moments[2] - expected.variance).abs() < 1e-12);
    }

    #[test]
    fn test_order_four_matches_kurtosis() {
        let mut moments = CentralMoments::new(4).unwrap();
        let mut kurtosis = WeightedKurtosis::new();
        moments.extend_weighted(DATA);
        kurtosis.extend_weighted(DATA);

        let standardized = moments.standardized().unwrap();
        let expected = kurtosis.summary().unwrap();
        assert!(standardized.standardized);
        assert!((standardized.moments[3] - expected.skewness).abs() < 1e-10);
        assert!((standardized.moments[4] - expected.kurtosis).abs() < 1e-10);
    }

    #[test]
    fn test_finalize_into() {
        let mut moments = CentralMoments::new(3).unwrap();
        moments.extend_weighted(DATA);

        let mut results = [0.0; 5];
        moments.finalize_into(&mut results, false).unwrap();
        let summary = moments.summary().unwrap();
        assert_eq!(&results[..4], summary.moments.as_slice());
        assert_eq!(results[4], summary.mean);

        let mut short = [0.0; 4];
        assert_eq!(
            moments.finalize_into(&mut short, false),
            Err(Error::BufferTooShort {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn test_summary_accessors() {
        let mut moments = CentralMoments::new(3).unwrap();
        moments.extend_weighted(DATA);

        let summary = moments.summary().unwrap();
        assert_eq!(summary.moment(0), Some(1.0));
        assert_eq!(summary.moment(1), Some(0.0));
        assert!(summary.moment(3).is_some());
        assert_eq!(summary.moment(4), None);
    }

    #[test]
    fn test_raw_and_standardized_from_same_state() {
        let mut moments = CentralMoments::new(6).unwrap();
        moments.extend_weighted(DATA);
        let before = moments.clone();

        let raw = moments.summary().unwrap();
        let standardized = moments.standardized().unwrap();
        assert_eq!(moments, before);

        let std_dev = raw.moments[2].sqrt();
        for k in 2..=6 {
            let expected = raw.moments[k] / std_dev.powi(k as i32);
            assert!((standardized.moments[k] - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_clear() {
        let mut moments = CentralMoments::new(4).unwrap();
        moments.add(1.0);
        moments.add(2.0);

        moments.clear();

        assert!(moments.is_empty());
        assert_eq!(moments.order(), 4);
        assert_eq!(moments.buffer(), &[0.0; 5]);
    }
}
