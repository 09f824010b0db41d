//! The pool's pair of distinct, non-null assets.

use super::{Address, Direction};
use crate::error::SwapError;

/// The two assets a pool trades, kept in construction order.
///
/// Unlike a canonically sorted pair, `token_a` is always the first asset the
/// pool was created with, so `reserve_a` stays attached to it.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Direction, TokenPair};
///
/// let a = Address::from_bytes([2u8; 32]);
/// let b = Address::from_bytes([1u8; 32]);
/// let pair = TokenPair::new(a, b).expect("distinct, non-null");
/// assert_eq!(pair.token_a(), a);
/// assert_eq!(pair.direction(b, a).ok(), Some(Direction::BToA));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_a: Address,
    token_b: Address,
}

impl TokenPair {
    /// Creates a pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if either identity is null or
    /// both are the same.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self, SwapError> {
        let pair = Self { token_a, token_b };
        pair.validate()?;
        Ok(pair)
    }

    /// Re-checks the pair invariants.
    ///
    /// Needed after deserialization, which bypasses [`TokenPair::new`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`TokenPair::new`].
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.token_a.is_zero() || self.token_b.is_zero() {
            return Err(SwapError::InvalidToken("token identity must not be null"));
        }
        if self.token_a == self.token_b {
            return Err(SwapError::InvalidToken(
                "token pair requires two distinct identities",
            ));
        }
        Ok(())
    }

    /// Returns the first asset.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.token_a
    }

    /// Returns the second asset.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.token_b
    }

    /// Returns `true` if `token` is one of the two assets.
    #[must_use]
    pub fn contains(&self, token: &Address) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns `true` if `{x, y}` equals `{token_a, token_b}` in either order.
    #[must_use]
    pub fn matches(&self, x: Address, y: Address) -> bool {
        (x == self.token_a && y == self.token_b) || (x == self.token_b && y == self.token_a)
    }

    /// Checks caller-supplied identities for a liquidity operation.
    ///
    /// Both must be non-null and name this pair, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] otherwise.
    pub fn require(&self, x: Address, y: Address) -> Result<(), SwapError> {
        if x.is_zero() || y.is_zero() {
            return Err(SwapError::InvalidToken("invalid tokens"));
        }
        if !self.matches(x, y) {
            return Err(SwapError::InvalidToken("tokens do not match the pool pair"));
        }
        Ok(())
    }

    /// Resolves the trade direction for `token_in → token_out`.
    ///
    /// A pair never holds the null identity, so a null path falls through to
    /// the mismatch case.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidPair`] unless the two identities name this
    /// pair as `(a, b)` or `(b, a)`.
    pub fn direction(&self, token_in: Address, token_out: Address) -> Result<Direction, SwapError> {
        if token_in == self.token_a && token_out == self.token_b {
            Ok(Direction::AToB)
        } else if token_in == self.token_b && token_out == self.token_a {
            Ok(Direction::BToA)
        } else {
            Err(SwapError::InvalidPair("invalid token pair"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    fn pair() -> TokenPair {
        let Ok(p) = TokenPair::new(addr(2), addr(1)) else {
            panic!("expected Ok");
        };
        p
    }

    #[test]
    fn keeps_construction_order() {
        let p = pair();
        assert_eq!(p.token_a(), addr(2));
        assert_eq!(p.token_b(), addr(1));
    }

    #[test]
    fn rejects_null() {
        assert!(matches!(
            TokenPair::new(Address::ZERO, addr(1)),
            Err(SwapError::InvalidToken(_))
        ));
        assert!(matches!(
            TokenPair::new(addr(1), Address::ZERO),
            Err(SwapError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_identical() {
        assert!(matches!(
            TokenPair::new(addr(1), addr(1)),
            Err(SwapError::InvalidToken(_))
        ));
    }

    #[test]
    fn matches_either_order() {
        let p = pair();
        assert!(p.matches(addr(1), addr(2)));
        assert!(p.matches(addr(2), addr(1)));
        assert!(!p.matches(addr(1), addr(1)));
        assert!(!p.matches(addr(1), addr(3)));
    }

    #[test]
    fn require_distinguishes_null_from_foreign() {
        let p = pair();
        assert_eq!(p.require(addr(2), addr(1)), Ok(()));
        assert_eq!(
            p.require(Address::ZERO, addr(1)),
            Err(SwapError::InvalidToken("invalid tokens"))
        );
        assert!(matches!(
            p.require(addr(3), addr(1)),
            Err(SwapError::InvalidToken(_))
        ));
    }

    #[test]
    fn direction_resolution() {
        let p = pair();
        assert_eq!(p.direction(addr(2), addr(1)), Ok(Direction::AToB));
        assert_eq!(p.direction(addr(1), addr(2)), Ok(Direction::BToA));
        assert!(matches!(
            p.direction(addr(2), addr(2)),
            Err(SwapError::InvalidPair(_))
        ));
        assert!(matches!(
            p.direction(addr(2), addr(9)),
            Err(SwapError::InvalidPair(_))
        ));
        assert!(matches!(
            p.direction(Address::ZERO, addr(1)),
            Err(SwapError::InvalidPair(_))
        ));
        assert!(matches!(
            p.direction(addr(2), Address::ZERO),
            Err(SwapError::InvalidPair(_))
        ));
    }

    #[test]
    fn contains() {
        let p = pair();
        assert!(p.contains(&addr(1)));
        assert!(!p.contains(&addr(3)));
    }
}
