//! Exact integer combinatorics with overflow detection

use crate::io::error::{Result, computation_error, invalid_parameter};
use num_traits::{Float, PrimInt};
use std::fmt;

/// Factorial `x!` as the product of `1..=x`
///
/// `0!` is the empty product and evaluates to one.
///
/// # Errors
///
/// Returns an invalid parameter error if `x` is negative, and a computation
/// error if the product does not fit in `T`
pub fn factorial<T>(x: T) -> Result<T>
where
    T: PrimInt + fmt::Display,
{
    if x < T::zero() {
        return Err(invalid_parameter(
            "x",
            &x,
            &"factorial is undefined for negative integers",
        ));
    }

    let mut result = T::one();
    let mut k = T::one();
    while k <= x {
        result = result
            .checked_mul(&k)
            .ok_or_else(|| computation_error("factorial", &format!("{x}! overflows")))?;
        k = k + T::one();
    }

    Ok(result)
}

/// Binomial coefficient `n! / (x! (n - x)!)`
///
/// Evaluated with the multiplicative recurrence `C(n, i + 1) = C(n, i) (n - i) / (i + 1)`
/// over `min(x, n - x)` factors. The common factor of `C(n, i)` and `i + 1` is
/// cancelled first, so each step multiplies straight to `C(n, i + 1)` and
/// overflow is reported only when a coefficient itself does not fit in `T`.
///
/// # Errors
///
/// Returns an invalid parameter error unless `0 <= x <= n`, and a computation
/// error if `C(n, x)` does not fit in `T`
pub fn binomial_coefficient<T>(n: T, x: T) -> Result<T>
where
    T: PrimInt + fmt::Display,
{
    if x < T::zero() || x > n {
        return Err(invalid_parameter(
            "x",
            &x,
            &format!("must satisfy 0 <= x <= n (n = {n})"),
        ));
    }

    let k = x.min(n - x);
    let mut result = T::one();
    let mut i = T::zero();
    while i < k {
        let step = i + T::one();
        let common = gcd(result, step);
        let factor = (n - i) / (step / common);
        result = (result / common).checked_mul(&factor).ok_or_else(|| {
            computation_error("binomial_coefficient", &format!("C({n}, {x}) overflows"))
        })?;
        i = step;
    }

    Ok(result)
}

fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Natural logarithm of the binomial coefficient `C(n, x)`
///
/// Sums `ln((n - i) / (i + 1))` over `min(x, n - x)` factors, so it stays
/// finite for trial counts whose coefficient overflows every integer type.
///
/// # Errors
///
/// Returns an invalid parameter error if `x > n`
pub fn ln_binomial_coefficient(n: u64, x: u64) -> Result<f64> {
    if x > n {
        return Err(invalid_parameter(
            "x",
            &x,
            &format!("must satisfy 0 <= x <= n (n = {n})"),
        ));
    }

    let k = x.min(n - x);
    Ok((0..k)
        .map(|i| ((n - i) as f64 / (i + 1) as f64).ln())
        .sum())
}

/// Raise `base` to a non-negative integer power by repeated squaring
///
/// `power(b, 0)` is exactly one for every base, including zero.
///
/// # Errors
///
/// Returns a computation error if `exponent` does not fit in `usize` on this target
pub fn power<F: Float>(base: F, exponent: u64) -> Result<F> {
    let exponent = usize::try_from(exponent).map_err(|_too_large| {
        computation_error("power", &format!("exponent {exponent} exceeds usize"))
    })?;

    Ok(num_traits::pow(base, exponent))
}
