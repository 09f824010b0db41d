//! Proportional deposit helper.

use crate::domain::{Amount, Rounding};
use crate::error::{Result, SwapError};

use super::mul_div;

/// Returns the amount of the other asset worth `amount_a` at the reserve
/// ratio: `amount_a * reserve_b / reserve_a`, rounded down.
///
/// # Errors
///
/// - [`SwapError::InvalidAmount`] if `amount_a` or either reserve is zero.
/// - [`SwapError::Overflow`] if the result does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
/// use simple_swap::math::quote;
///
/// let b = quote(Amount::new(100), Amount::new(50_000), Amount::new(25_000));
/// assert_eq!(b.ok(), Some(Amount::new(50)));
/// ```
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(SwapError::InvalidAmount("insufficient amount"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(SwapError::InvalidAmount("insufficient liquidity"));
    }
    mul_div(amount_a.get(), reserve_b.get(), reserve_a.get(), Rounding::Down).map(Amount::new)
}
