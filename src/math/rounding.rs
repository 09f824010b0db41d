//! Rounding-aware `u128` division.
//!
//! Every quotient in the pool states which way it rounds.  Amounts paid out
//! of the pool and shares minted round down; fees taken by the pool round up.
//!
//! ```
//! use simple_swap::domain::Rounding;
//! use simple_swap::math::div_round;
//!
//! assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
//! assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
//! assert_eq!(div_round(7, 0, Rounding::Up), None);
//! ```

use crate::domain::Rounding;

/// Divides `numerator` by `denominator`, rounding as requested.
///
/// Returns [`None`] if `denominator` is zero.  Ceiling division is computed
/// from quotient and remainder, so it cannot overflow even at `u128::MAX`.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Up if numerator % denominator != 0 => Some(quotient + 1),
        _ => Some(quotient),
    }
}
