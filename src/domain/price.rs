//! Spot exchange rate as an 18-decimal fixed-point integer.

use core::fmt;

use super::{Amount, Decimals, Rounding};
use crate::error::SwapError;
use crate::math::mul_div;

/// Spot rate `reserve_out / reserve_in`, scaled by [`Price::SCALE`].
///
/// A raw value of `5 * 10^17` reads as `0.5`: one unit of the input asset
/// buys half a unit of the output asset at the margin.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Price};
///
/// let price = Price::from_reserves(Amount::new(50_000), Amount::new(25_000))
///     .expect("funded reserves");
/// assert_eq!(price.raw(), 500_000_000_000_000_000);
/// assert_eq!(price.to_string(), "0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale, `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// A rate of exactly one.
    pub const ONE: Self = Self(Self::SCALE);

    /// Wraps an already-scaled value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the scaled integer.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Computes `reserve_out * 10^18 / reserve_in`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidAmount`] if either reserve is zero and
    /// [`SwapError::Overflow`] if the scaled rate does not fit in `u128`.
    pub fn from_reserves(reserve_in: Amount, reserve_out: Amount) -> Result<Self, SwapError> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(SwapError::InvalidAmount("pool has no reserves"));
        }
        mul_div(reserve_out.get(), Self::SCALE, reserve_in.get(), Rounding::Down).map(Self)
    }

    /// Returns the reciprocal rate, `10^36 / raw`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::DivisionByZero`] for a zero price.
    pub fn inverse(&self) -> Result<Self, SwapError> {
        if self.0 == 0 {
            return Err(SwapError::DivisionByZero);
        }
        mul_div(Self::SCALE, Self::SCALE, self.0, Rounding::Down).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Decimals::STANDARD.format_raw(Amount::new(self.0)))
    }
}
