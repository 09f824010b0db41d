//! Constant-product pricing.
//!
//! ```text
//! fee        = ceil(amount_in · fee_bps / 10_000)
//! net_in     = amount_in − fee
//! amount_out = floor(reserve_out · net_in / (reserve_in + net_in))
//! ```
//!
//! The fee never leaves the pool: the whole `amount_in` is added to the
//! input reserve, so `k` grows by the fee's share of the trade.

use crate::domain::{Amount, BasisPoints, FeeTier, Rounding};
use crate::error::{Result, SwapError};
use crate::math::{mul_div, CheckedArithmetic};

/// Pricing of one exact-input trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwapQuote {
    pub(crate) amount_out: Amount,
    pub(crate) fee: Amount,
}

/// Output of a fee-less constant-product trade.
///
/// `reserve_out · amount_in / (reserve_in + amount_in)`, rounded down.  May
/// be zero for inputs too small to move the price by one unit.
///
/// # Errors
///
/// - [`SwapError::InvalidAmount`] if `amount_in` or either reserve is zero.
/// - [`SwapError::Overflow`] if `reserve_in + amount_in` exceeds `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
/// use simple_swap::pool::get_amount_out;
///
/// let e18 = 1_000_000_000_000_000_000u128;
/// let out = get_amount_out(
///     Amount::new(1_000 * e18),
///     Amount::new(50_000 * e18),
///     Amount::new(25_000 * e18),
/// )
/// .expect("funded pool");
/// assert!(out < Amount::new(500 * e18));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount> {
    get_amount_out_with_fee(amount_in, reserve_in, reserve_out, FeeTier::ZERO)
}

/// Output of a constant-product trade after deducting `fee_tier` from the
/// input.
///
/// # Errors
///
/// Same as [`get_amount_out`], plus [`SwapError::InvalidAmount`] when the
/// fee consumes the entire input.
pub fn get_amount_out_with_fee(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_tier: FeeTier,
) -> Result<Amount> {
    quote_exact_in(amount_in, reserve_in, reserve_out, fee_tier).map(|q| q.amount_out)
}

pub(crate) fn quote_exact_in(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_tier: FeeTier,
) -> Result<SwapQuote> {
    if amount_in.is_zero() {
        return Err(SwapError::InvalidAmount("amount in must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SwapError::InvalidAmount("insufficient liquidity"));
    }

    let fee = fee_tier.fee_on(amount_in)?;
    let net_in = amount_in.safe_sub(&fee)?;
    if net_in.is_zero() {
        return Err(SwapError::InvalidAmount("amount in is consumed by the fee"));
    }

    let denominator = reserve_in.safe_add(&net_in)?;
    let amount_out = mul_div(
        reserve_out.get(),
        net_in.get(),
        denominator.get(),
        Rounding::Down,
    )?;

    Ok(SwapQuote {
        amount_out: Amount::new(amount_out),
        fee,
    })
}

/// Smallest output to accept for an `expected` output with `tolerance` slack.
///
/// `expected · (10_000 − tolerance) / 10_000`, rounded down.
///
/// # Errors
///
/// Returns [`SwapError::InvalidAmount`] if `tolerance` exceeds 100%.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, BasisPoints};
/// use simple_swap::pool::min_amount_out;
///
/// let floor = min_amount_out(Amount::new(10_000), BasisPoints::new(50));
/// assert_eq!(floor.ok(), Some(Amount::new(9_950)));
/// ```
pub fn min_amount_out(expected: Amount, tolerance: BasisPoints) -> Result<Amount> {
    tolerance.complement()?.apply(expected, Rounding::Down)
}
