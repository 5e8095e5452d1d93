//! Arithmetic primitives used by the moment recurrences
//!
//! Integer powers, factorials and binomial coefficients. The binomial
//! coefficients weight the cross terms of the order-`p` recurrence in
//! [`statistics::kernel`](crate::statistics::kernel).

/// Raise `x` to a non-negative integer power by repeated multiplication.
///
/// `y == 0` returns `1.0` for every `x`, including `0.0` and NaN.
///
/// # Example
///
/// ```
/// use incstats::primitives::ipow;
///
/// assert_eq!(ipow(2.0, 10), 1024.0);
/// assert_eq!(ipow(0.0, 0), 1.0);
/// ```
#[inline]
pub fn ipow(x: f64, y: u64) -> f64 {
    if y == 0 {
        return 1.0;
    }
    let mut result = x;
    for _ in 1..y {
        result *= x;
    }
    result
}

/// Compute `n!`.
///
/// `0!` and `1!` are both 1. The result only fits a `u64` for `n <= 20`;
/// larger inputs overflow.
#[inline]
pub fn factorial(n: u64) -> u64 {
    (2..=n).product()
}

/// Compute the binomial coefficient `C(n, k)`.
///
/// Uses the multiplicative formula over the smaller side `min(k, n - k)`.
/// Each step divides before multiplying whenever the division is exact, so
/// intermediates stay close to the final value. Returns 0 when `k > n`.
///
/// # Example
///
/// ```
/// use incstats::primitives::binomial;
///
/// assert_eq!(binomial(4, 2), 6);
/// assert_eq!(binomial(10, 3), 120);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut n = n;
    let mut result = 1u64;
    for j in 1..=k {
        if n % j == 0 {
            result *= n / j;
        } else if result % j == 0 {
            result = result / j * n;
        } else {
            result = result * n / j;
        }
        n -= 1;
    }
    result
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}
