//! Running maximum and minimum
//!
//! [`track_max`] and [`track_min`] update a caller-owned value in place and
//! perform no first-sample detection: seed the value with something every
//! real sample overwrites, such as `f64::NEG_INFINITY` for a maximum.
//! [`Extrema`] owns both ends and does the seeding itself.

/// Replace `max` with `x` if `x` is strictly greater
///
/// Ties and NaN keep the stored value.
///
/// # Example
///
/// ```
/// use incstats::extremum::track_max;
///
/// let mut max = f64::NEG_INFINITY;
/// for x in [3.0, 9.0, 4.0] {
///     track_max(x, &mut max);
/// }
/// assert_eq!(max, 9.0);
/// ```
#[inline]
pub fn track_max(x: f64, max: &mut f64) {
    if *max < x {
        *max = x;
    }
}

/// Replace `min` with `x` if `x` is strictly less
///
/// Ties and NaN keep the stored value.
#[inline]
pub fn track_min(x: f64, min: &mut f64) {
    if *min > x {
        *min = x;
    }
}

/// Running minimum and maximum of a stream
///
/// # Example
///
/// ```
/// use incstats::extremum::Extrema;
///
/// let mut extrema = Extrema::new();
/// assert_eq!(extrema.max(), None);
///
/// for x in [4.0, -2.0, 7.5] {
///     extrema.add(x);
/// }
/// assert_eq!(extrema.min(), Some(-2.0));
/// assert_eq!(extrema.max(), Some(7.5));
/// assert_eq!(extrema.range(), Some(9.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extrema {
    min: f64,
    max: f64,
}

impl Default for Extrema {
    fn default() -> Self {
        Self::new()
    }
}

impl Extrema {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Fold a value into both ends
    pub fn add(&mut self, x: f64) {
        track_min(x, &mut self.min);
        track_max(x, &mut self.max);
    }

    /// Check if no value has been recorded
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Smallest value seen
    pub fn min(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.min)
        }
    }

    /// Largest value seen
    pub fn max(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.max)
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Extend<f64> for Extrema {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}
