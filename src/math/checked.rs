//! Fallible arithmetic on pool quantities.
//!
//! The domain newtypes expose `checked_*` methods returning [`Option`];
//! [`CheckedArithmetic`] lifts them into [`SwapError`] so pool code can chain
//! with `?` and still tell overflow from underflow.
//!
//! ```
//! use simple_swap::domain::Amount;
//! use simple_swap::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(50_000).safe_add(&Amount::new(1_000));
//! assert_eq!(reserve.ok(), Some(Amount::new(51_000)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::SwapError;

/// Checked operations that report failures as [`SwapError`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the sum does not fit.
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Underflow`] if `other > self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the product does not fit.
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked division.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_mul(other)
            .ok_or(SwapError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError> {
        self.checked_div(other, rounding)
            .ok_or(SwapError::DivisionByZero)
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Underflow("liquidity subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError> {
        self.get()
            .checked_mul(other.get())
            .map(Liquidity::new)
            .ok_or(SwapError::Overflow("liquidity multiplication overflow"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError> {
        super::div_round(self.get(), other.get(), rounding)
            .map(Liquidity::new)
            .ok_or(SwapError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_and_overflow() {
            let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(300));
            let Err(SwapError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn sub_and_underflow() {
            let Ok(r) = Amount::new(42).safe_sub(&Amount::new(42)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::ZERO);
            let Err(SwapError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn mul_overflow() {
            let Err(SwapError::Overflow(_)) = Amount::MAX.safe_mul(&Amount::new(2)) else {
                panic!("expected Overflow");
            };
        }

        #[test]
        fn div_directions_and_zero() {
            assert_eq!(
                Amount::new(10).safe_div(&Amount::new(3), Rounding::Down),
                Ok(Amount::new(3))
            );
            assert_eq!(
                Amount::new(10).safe_div(&Amount::new(3), Rounding::Up),
                Ok(Amount::new(4))
            );
            assert_eq!(
                Amount::new(10).safe_div(&Amount::ZERO, Rounding::Up),
                Err(SwapError::DivisionByZero)
            );
        }

        #[test]
        fn chaining() {
            // (100 + 200) * 3 - 100 = 800
            let result = Amount::new(100)
                .safe_add(&Amount::new(200))
                .and_then(|v| v.safe_mul(&Amount::new(3)))
                .and_then(|v| v.safe_sub(&Amount::new(100)));
            assert_eq!(result, Ok(Amount::new(800)));
        }
    }

    mod liquidity {
        use super::*;

        #[test]
        fn add_sub() {
            assert_eq!(
                Liquidity::new(100).safe_add(&Liquidity::new(50)),
                Ok(Liquidity::new(150))
            );
            let Err(SwapError::Underflow(_)) = Liquidity::new(10).safe_sub(&Liquidity::new(11))
            else {
                panic!("expected Underflow");
            };
        }

        #[test]
        fn mul_div() {
            let Err(SwapError::Overflow(_)) =
                Liquidity::new(u128::MAX).safe_mul(&Liquidity::new(2))
            else {
                panic!("expected Overflow");
            };
            assert_eq!(
                Liquidity::new(7).safe_div(&Liquidity::new(2), Rounding::Up),
                Ok(Liquidity::new(4))
            );
            assert_eq!(
                Liquidity::new(7).safe_div(&Liquidity::ZERO, Rounding::Down),
                Err(SwapError::DivisionByZero)
            );
        }
    }
}
