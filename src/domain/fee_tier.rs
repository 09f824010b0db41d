//! Trading fee rate deducted from swap inputs.

use core::fmt;

use super::{Amount, BasisPoints, Rounding};

/// Fixed trading fee charged on every swap input.
///
/// The fee is deducted from `amount_in` before the constant-product
/// formula runs and stays in the pool, so the reserve product grows.  The
/// default is [`FeeTier::ZERO`].
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, BasisPoints, FeeTier};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.basis_points(), BasisPoints::new(30));
/// assert_eq!(tier.fee_on(Amount::new(1_000)).ok(), Some(Amount::new(3)));
/// assert!(FeeTier::default().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee: the pure `x · y = k` formula.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.30%, the common rate for volatile pairs.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` when no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Fee owed on `amount_in`, rounded up in the pool's favour.
    ///
    /// # Errors
    ///
    /// Propagates [`BasisPoints::apply`] failures.
    pub fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in, Rounding::Up)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
