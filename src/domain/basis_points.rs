//! Basis-point representation for fee rates and slippage tolerances.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{Result, SwapError};
use crate::math::mul_div;

/// Basis-point denominator (10 000 bp = 100%).
pub(crate) const BPS_DENOMINATOR: u128 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%).
///
/// Any `u32` is representable; values above 10 000 are meaningless as
/// percentages and are rejected by the operations that consume them.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, BasisPoints, Rounding};
///
/// let half_percent = BasisPoints::new(50);
/// let cut = half_percent.apply(Amount::new(1_000), Rounding::Down);
/// assert_eq!(cut.ok(), Some(Amount::new(5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(10_000);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= Self::MAX_PERCENT.0
    }

    /// Returns `10_000 - self`, the share that remains after applying `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidAmount`] if `self` exceeds 100%.
    pub fn complement(&self) -> Result<Self> {
        Self::MAX_PERCENT
            .0
            .checked_sub(self.0)
            .map(Self)
            .ok_or(SwapError::InvalidAmount("basis points exceed 100%"))
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result does not fit in an
    /// [`Amount`], which only happens for values above 100%.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(amount.get(), u128::from(self.0), BPS_DENOMINATOR, rounding).map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
