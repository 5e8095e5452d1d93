//! Caller-owned buffer kernels for weighted moments
//!
//! Every statistic is split into an `update_*` function that folds one
//! weighted sample into a small accumulator buffer, and a `finalize_*`
//! function that derives the reported values from the buffer without
//! touching it. Buffers start zeroed and are reused for the whole stream.
//!
//! # Buffer layout
//!
//! ```text
//! slot 0      cumulative weight            Σ w
//! slot 1      running weighted mean
//! slot k≥2    running central sum          Σ w·(x − mean)^k
//! ```
//!
//! # Recurrence
//!
//! With `W` the weight before the sample, `W' = W + w` and `δ = x − mean`:
//!
//! ```text
//! d = −w·δ / W'
//! e =  W·δ / W'
//! M_i += Σ_{k=1}^{i−2} C(i,k)·M_{i−k}·d^k + W·d^i + w·e^i
//! ```
//!
//! All orders read the same pre-update snapshot; the mean and the weight
//! are committed last.
//!
//! # Example
//!
//! ```
//! use incstats::statistics::kernel::{self, VarianceBuffer};
//!
//! let mut buffer: VarianceBuffer = [0.0; 3];
//! for (x, w) in [(1.0, 1.0), (2.0, 2.0), (4.0, 1.0)] {
//!     kernel::update_variance(x, w, &mut buffer);
//! }
//!
//! let mut results = [0.0; 2];
//! kernel::finalize_variance(&mut results, &buffer);
//! assert!((results[0] - 2.25).abs() < 1e-12);
//! assert!((results[1] - 1.1875).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use crate::primitives::{binomial, ipow, sqrt};

/// Largest central moment order supported by the generalized kernel.
pub const MAX_ORDER: usize = 32;

/// Accumulator for [`update_mean`]: `[weight, mean]`.
pub type MeanBuffer = [f64; 2];

/// Accumulator for [`update_variance`]: `[weight, mean, M2]`.
pub type VarianceBuffer = [f64; 3];

/// Accumulator for [`update_skewness`]: `[weight, mean, M2, M3]`.
pub type SkewnessBuffer = [f64; 4];

/// Accumulator for [`update_kurtosis`]: `[weight, mean, M2, M3, M4]`.
pub type KurtosisBuffer = [f64; 5];

// ============================================================================
// Orders 1-4
// ============================================================================

/// Fold a weighted sample into a running mean.
///
/// A zero weight leaves the buffer untouched.
#[inline]
pub fn update_mean(x: f64, w: f64, buffer: &mut MeanBuffer) {
    if w == 0.0 {
        return;
    }
    buffer[0] += w;
    buffer[1] += w / buffer[0] * (x - buffer[1]);
}

/// Read the running mean.
#[inline]
pub fn finalize_mean(buffer: &MeanBuffer) -> f64 {
    buffer[1]
}

/// Fold a weighted sample into a running mean and variance.
#[inline]
pub fn update_variance(x: f64, w: f64, buffer: &mut VarianceBuffer) {
    if w == 0.0 {
        return;
    }
    let [weight, mean, m2] = *buffer;
    let total = weight + w;
    let new_mean = mean + w / total * (x - mean);

    buffer[2] = m2 + w * (x - mean) * (x - new_mean);
    buffer[1] = new_mean;
    buffer[0] = total;
}

/// Write `[mean, variance]` into `results`.
///
/// The variance is the population variance (no Bessel correction).
#[inline]
pub fn finalize_variance(results: &mut [f64; 2], buffer: &VarianceBuffer) {
    let [weight, mean, m2] = *buffer;
    results[0] = mean;
    results[1] = m2 / weight;
}

/// Fold a weighted sample into a running mean, variance and skewness.
#[inline]
pub fn update_skewness(x: f64, w: f64, buffer: &mut SkewnessBuffer) {
    if w == 0.0 {
        return;
    }
    let [weight, mean, m2, m3] = *buffer;
    let total = weight + w;
    let delta = x - mean;
    let d = -w * delta / total;
    let e = weight * delta / total;

    buffer[3] = m3 + 3.0 * m2 * d + weight * ipow(d, 3) + w * ipow(e, 3);
    buffer[2] = m2 + weight * ipow(d, 2) + w * ipow(e, 2);
    buffer[1] = mean + w / total * delta;
    buffer[0] = total;
}

/// Write `[mean, variance, skewness]` into `results`.
///
/// Skewness is the population value `(M3/W) / (M2/W)^1.5`.
#[inline]
pub fn finalize_skewness(results: &mut [f64; 3], buffer: &SkewnessBuffer) {
    let [weight, mean, m2, m3] = *buffer;
    let variance = m2 / weight;
    results[0] = mean;
    results[1] = variance;
    results[2] = (m3 / weight) / (variance * sqrt(variance));
}

/// Fold a weighted sample into a running mean, variance, skewness and
/// kurtosis.
///
/// The fourth order reads the third and second orders before they are
/// updated for this sample.
#[inline]
pub fn update_kurtosis(x: f64, w: f64, buffer: &mut KurtosisBuffer) {
    if w == 0.0 {
        return;
    }
    let [weight, mean, m2, m3, m4] = *buffer;
    let total = weight + w;
    let delta = x - mean;
    let d = -w * delta / total;
    let e = weight * delta / total;

    buffer[4] = m4
        + 4.0 * m3 * d
        + 6.0 * m2 * ipow(d, 2)
        + weight * ipow(d, 4)
        + w * ipow(e, 4);
    buffer[3] = m3 + 3.0 * m2 * d + weight * ipow(d, 3) + w * ipow(e, 3);
    buffer[2] = m2 + weight * ipow(d, 2) + w * ipow(e, 2);
    buffer[1] = mean + w / total * delta;
    buffer[0] = total;
}

/// Write `[mean, variance, skewness, kurtosis]` into `results`.
///
/// Kurtosis is `(M4/W) / (M2/W)^2`, not excess kurtosis.
#[inline]
pub fn finalize_kurtosis(results: &mut [f64; 4], buffer: &KurtosisBuffer) {
    let [weight, mean, m2, m3, m4] = *buffer;
    let variance = m2 / weight;
    results[0] = mean;
    results[1] = variance;
    results[2] = (m3 / weight) / (variance * sqrt(variance));
    results[3] = (m4 / weight) / ipow(variance, 2);
}

// ============================================================================
// Order p
// ============================================================================

/// Fold a weighted sample into running central moments up to `order`.
///
/// `buffer` must hold at least `order + 1` slots and `order` must be in
/// `2..=MAX_ORDER`.
///
/// # Example
///
/// ```
/// use incstats::statistics::kernel;
///
/// let mut buffer = [0.0; 5];
/// for x in [1.0, 2.0, 3.0, 10.0] {
///     kernel::update_central_moment(x, 1.0, &mut buffer, 4).unwrap();
/// }
/// assert_eq!(buffer[0], 4.0);
/// assert_eq!(buffer[1], 4.0);
/// ```
pub fn update_central_moment(x: f64, w: f64, buffer: &mut [f64], order: usize) -> Result<()> {
    check_order(order)?;
    check_len(order + 1, buffer.len())?;
    accumulate(x, w, &mut buffer[..=order]);
    Ok(())
}

/// Derive central moments `0..=order` and the mean from `buffer`.
///
/// `results[0]` is 1, `results[1]` is 0, `results[i]` is `M_i / W` and
/// `results[order + 1]` is the running mean. With `standardize`, each
/// moment is further divided by `σ^i`.
///
/// # Example
///
/// ```
/// use incstats::statistics::kernel;
///
/// let mut buffer = [0.0; 3];
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     kernel::update_central_moment(x, 1.0, &mut buffer, 2).unwrap();
/// }
///
/// let mut results = [0.0; 4];
/// kernel::finalize_central_moment(&mut results, &buffer, 2, false).unwrap();
/// assert!((results[2] - 4.0).abs() < 1e-12);
/// assert!((results[3] - 5.0).abs() < 1e-12);
/// ```
pub fn finalize_central_moment(
    results: &mut [f64],
    buffer: &[f64],
    order: usize,
    standardize: bool,
) -> Result<()> {
    check_order(order)?;
    check_len(order + 1, buffer.len())?;
    check_len(order + 2, results.len())?;
    derive(&mut results[..order + 2], &buffer[..=order], standardize);
    Ok(())
}

/// Order-`p` update over an already validated buffer of length `p + 1`.
pub(crate) fn accumulate(x: f64, w: f64, buffer: &mut [f64]) {
    if w == 0.0 {
        return;
    }
    let order = buffer.len() - 1;
    let weight = buffer[0];
    let mean = buffer[1];
    let total = weight + w;
    let delta = x - mean;
    let d = -w * delta / total;
    let e = weight * delta / total;

    // Staged so every order reads the same pre-update snapshot.
    let mut staged = [0.0f64; MAX_ORDER + 1];
    for i in (2..=order).rev() {
        let mut cross = 0.0;
        for k in (1..=i - 2).rev() {
            cross += binomial(i as u64, k as u64) as f64 * buffer[i - k] * ipow(d, k as u64);
        }
        staged[i] = buffer[i] + cross + weight * ipow(d, i as u64) + w * ipow(e, i as u64);
    }

    buffer[2..].copy_from_slice(&staged[2..=order]);
    buffer[1] = mean + w / total * delta;
    buffer[0] = total;
}

/// Order-`p` finalize over a validated buffer (`p + 1`) and results (`p + 2`).
pub(crate) fn derive(results: &mut [f64], buffer: &[f64], standardize: bool) {
    let order = buffer.len() - 1;
    let weight = buffer[0];

    results[0] = 1.0;
    results[1] = 0.0;
    for (moment, &sum) in results[2..=order].iter_mut().zip(&buffer[2..]) {
        *moment = sum / weight;
    }

    if standardize {
        let std_dev = sqrt(results[2]);
        for (i, moment) in results[..=order].iter_mut().enumerate() {
            *moment /= ipow(std_dev, i as u64);
        }
    }

    results[order + 1] = buffer[1];
}

pub(crate) fn check_order(order: usize) -> Result<()> {
    if !(2..=MAX_ORDER).contains(&order) {
        tracing::debug!(order, max = MAX_ORDER, "rejecting central moment order");
        return Err(Error::InvalidOrder {
            order,
            max: MAX_ORDER,
        });
    }
    Ok(())
}

pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
    if found < expected {
        tracing::debug!(expected, found, "rejecting undersized moment buffer");
        return Err(Error::BufferTooShort { expected, found });
    }
    Ok(())
}
