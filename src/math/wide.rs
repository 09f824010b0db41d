//! 256-bit intermediates for reserve products.
//!
//! Two 18-decimal reserves of a few tens of thousands of whole units already
//! multiply past `u128::MAX`, so every `a * b / d` in the pool goes through
//! [`U256`].  Results are narrowed back to `u128` only after the division.

use crate::domain::Rounding;
use crate::error::{Result, SwapError};

#[allow(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]
mod u256 {
    uint::construct_uint! {
        /// 256-bit unsigned integer used for intermediate products.
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Returns `a * b` as a [`U256`].
///
/// Both factors are below `2^128`, so the product always fits.
///
/// # Examples
///
/// ```
/// use simple_swap::math::{product, U256};
///
/// assert_eq!(product(u128::MAX, 2), U256::from(u128::MAX) * U256::from(2u8));
/// ```
#[must_use]
pub fn product(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `a * b / denominator` with explicit rounding.
///
/// # Errors
///
/// - [`SwapError::DivisionByZero`] if `denominator` is zero.
/// - [`SwapError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Rounding;
/// use simple_swap::math::mul_div;
///
/// let e18 = 1_000_000_000_000_000_000u128;
/// // 25_000e18 * 1_000e18 overflows u128 on its own.
/// let out = mul_div(25_000 * e18, 1_000 * e18, 51_000 * e18, Rounding::Down);
/// assert_eq!(out.ok(), Some(490_196_078_431_372_549_019));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(SwapError::DivisionByZero);
    }
    let (quotient, remainder) = product(a, b).div_mod(U256::from(denominator));
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient
            .checked_add(U256::one())
            .ok_or(SwapError::Overflow("mul_div rounding overflow"))?
    } else {
        quotient
    };
    narrow(quotient)
}

/// Returns `floor(sqrt(a * b))`, the geometric mean of `a` and `b`.
///
/// # Examples
///
/// ```
/// use simple_swap::math::sqrt_product;
///
/// assert_eq!(sqrt_product(4, 9), 6);
/// assert_eq!(sqrt_product(2, 3), 2);
/// ```
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    // sqrt of a value below 2^256 is below 2^128
    product(a, b).integer_sqrt().low_u128()
}

fn narrow(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(SwapError::Overflow("result exceeds u128"));
    }
    Ok(value.low_u128())
}
