//! Running weighted statistics (mean, variance, skewness, kurtosis)
//!
//! Owning wrappers around the fixed-size kernels. Each accumulator is a
//! plain array of `f64` slots, updated in O(1) per sample with the
//! Welford-style incremental deviation form.

use crate::primitives::sqrt;
use crate::statistics::kernel::{
    self, KurtosisBuffer, MeanBuffer, SkewnessBuffer, VarianceBuffer,
};
use crate::traits::Accumulator;

// ============================================================================
// Mean
// ============================================================================

/// Running weighted mean
///
/// # Example
///
/// ```
/// use incstats::statistics::WeightedMean;
/// use incstats::traits::Accumulator;
///
/// let mut mean = WeightedMean::new();
/// mean.update(10.0, 3.0);
/// mean.update(20.0, 1.0);
///
/// assert!((mean.summary().unwrap() - 12.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedMean {
    buffer: MeanBuffer,
}

impl WeightedMean {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for WeightedMean {
    type Summary = f64;

    fn update(&mut self, value: f64, weight: f64) {
        kernel::update_mean(value, weight, &mut self.buffer);
    }

    fn summary(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(kernel::finalize_mean(&self.buffer))
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

// ============================================================================
// Variance
// ============================================================================

/// Finalized mean and population variance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VarianceSummary {
    /// Weighted mean
    pub mean: f64,
    /// Weighted population variance
    pub variance: f64,
}

impl VarianceSummary {
    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        sqrt(self.variance)
    }
}

/// Running weighted mean and variance
///
/// The variance is the population variance `Σ w·(x − mean)² / Σ w`; no
/// Bessel correction is applied.
///
/// # Example
///
/// ```
/// use incstats::statistics::WeightedVariance;
/// use incstats::traits::Accumulator;
///
/// let mut stats = WeightedVariance::new();
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.add(value);
/// }
///
/// let summary = stats.summary().unwrap();
/// assert!((summary.mean - 5.0).abs() < 1e-12);
/// assert!((summary.variance - 4.0).abs() < 1e-12);
/// assert!((summary.std_dev() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedVariance {
    buffer: VarianceBuffer,
}

impl WeightedVariance {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for WeightedVariance {
    type Summary = VarianceSummary;

    fn update(&mut self, value: f64, weight: f64) {
        kernel::update_variance(value, weight, &mut self.buffer);
    }

    fn summary(&self) -> Option<VarianceSummary> {
        if self.is_empty() {
            return None;
        }
        let mut results = [0.0; 2];
        kernel::finalize_variance(&mut results, &self.buffer);
        let [mean, variance] = results;
        Some(VarianceSummary { mean, variance })
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

// ============================================================================
// Skewness
// ============================================================================

/// Finalized mean, variance and skewness
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkewnessSummary {
    /// Weighted mean
    pub mean: f64,
    /// Weighted population variance
    pub variance: f64,
    /// Population skewness `m3 / m2^1.5`
    ///
    /// NaN while the variance is zero (a single distinct value).
    pub skewness: f64,
}

/// Running weighted mean, variance and skewness
///
/// # Example
///
/// ```
/// use incstats::statistics::WeightedSkewness;
/// use incstats::traits::Accumulator;
///
/// let mut stats = WeightedSkewness::new();
/// stats.extend_weighted([(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (10.0, 1.0)]);
///
/// let summary = stats.summary().unwrap();
/// assert!(summary.skewness > 0.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedSkewness {
    buffer: SkewnessBuffer,
}

impl WeightedSkewness {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for WeightedSkewness {
    type Summary = SkewnessSummary;

    fn update(&mut self, value: f64, weight: f64) {
        kernel::update_skewness(value, weight, &mut self.buffer);
    }

    fn summary(&self) -> Option<SkewnessSummary> {
        if self.is_empty() {
            return None;
        }
        let mut results = [0.0; 3];
        kernel::finalize_skewness(&mut results, &self.buffer);
        let [mean, variance, skewness] = results;
        Some(SkewnessSummary {
            mean,
            variance,
            skewness,
        })
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

// ============================================================================
// Kurtosis
// ============================================================================

/// Finalized mean, variance, skewness and kurtosis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KurtosisSummary {
    /// Weighted mean
    pub mean: f64,
    /// Weighted population variance
    pub variance: f64,
    /// Population skewness `m3 / m2^1.5`
    pub skewness: f64,
    /// Population kurtosis `m4 / m2^2` (3.0 for a normal distribution)
    pub kurtosis: f64,
}

impl KurtosisSummary {
    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        sqrt(self.variance)
    }

    /// Kurtosis relative to a normal distribution (`kurtosis - 3`)
    pub fn excess_kurtosis(&self) -> f64 {
        self.kurtosis - 3.0
    }
}

/// Running weighted mean, variance, skewness and kurtosis
///
/// # Example
///
/// ```
/// use incstats::statistics::WeightedKurtosis;
/// use incstats::traits::Accumulator;
///
/// let mut stats = WeightedKurtosis::new();
/// for value in [-3.0, -1.0, 0.0, 1.0, 3.0] {
///     stats.add(value);
/// }
///
/// let summary = stats.summary().unwrap();
/// assert!(summary.skewness.abs() < 1e-12);
/// assert!((summary.kurtosis - 2.05).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedKurtosis {
    buffer: KurtosisBuffer,
}

impl WeightedKurtosis {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for WeightedKurtosis {
    type Summary = KurtosisSummary;

    fn update(&mut self, value: f64, weight: f64) {
        kernel::update_kurtosis(value, weight, &mut self.buffer);
    }

    fn summary(&self) -> Option<KurtosisSummary> {
        if self.is_empty() {
            return None;
        }
        let mut results = [0.0; 4];
        kernel::finalize_kurtosis(&mut results, &self.buffer);
        let [mean, variance, skewness, kurtosis] = results;
        Some(KurtosisSummary {
            mean,
            variance,
            skewness,
            kurtosis,
        })
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VarianceSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("VarianceSummary", 2)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("variance", &self.variance)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SkewnessSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SkewnessSummary", 3)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("variance", &self.variance)?;
        state.serialize_field("skewness", &self.skewness)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KurtosisSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("KurtosisSummary", 4)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("variance", &self.variance)?;
        state.serialize_field("skewness", &self.skewness)?;
        state.serialize_field("kurtosis", &self.kurtosis)?;
        state.end()
    }
}
