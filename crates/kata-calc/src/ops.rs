//! Arithmetic operations
//!
//! Pure functions over `f64` (IEEE-754 semantics). Operations with a
//! restricted domain return [`CalcResult`].

use crate::error::{CalcError, CalcResult};

/// Largest `n` whose factorial fits in `u128`
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// `a + b`
#[inline]
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`
#[inline]
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a × b`
#[inline]
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`
///
/// # Errors
/// [`CalcError::DivisionByZero`] when `b` is `0.0` or `-0.0`.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        tracing::warn!(dividend = a, "rejected division by zero");
        return Err(CalcError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// `base ^ exponent`, including fractional and negative exponents
#[inline]
#[must_use]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Non-negative square root
///
/// # Errors
/// [`CalcError::InvalidDomain`] when `n < 0`.
pub fn sqrt(n: f64) -> CalcResult<f64> {
    if n < 0.0 {
        tracing::warn!(input = n, "rejected square root of negative number");
        return Err(CalcError::invalid_domain(
            "sqrt",
            format!("cannot take square root of negative number {n}"),
        ));
    }
    Ok(n.sqrt())
}

/// `value × percent / 100`
#[inline]
#[must_use]
pub fn percentage(value: f64, percent: f64) -> f64 {
    (value * percent) / 100.0
}

/// `n!` for `n >= 0`
///
/// # Errors
/// - [`CalcError::InvalidDomain`] when `n < 0`
/// - [`CalcError::Overflow`] when `n > MAX_FACTORIAL_INPUT`
pub fn factorial(n: i64) -> CalcResult<u128> {
    if n < 0 {
        tracing::warn!(input = n, "rejected factorial of negative number");
        return Err(CalcError::invalid_domain(
            "factorial",
            format!("not defined for negative number {n}"),
        ));
    }
    if n <= 1 {
        return Ok(1);
    }

    let mut result: u128 = 1;
    for i in 2..=n.unsigned_abs() {
        result = result
            .checked_mul(u128::from(i))
            .ok_or(CalcError::Overflow {
                operation: "factorial",
                input: n,
            })?;
    }
    tracing::debug!(input = n, "computed factorial");
    Ok(result)
}
