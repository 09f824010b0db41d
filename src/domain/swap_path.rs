//! Two-hop swap path and trade direction.

use core::fmt;

use super::Address;
use crate::error::SwapError;

/// Which way a trade moves through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Sell token A, receive token B.
    AToB,
    /// Sell token B, receive token A.
    BToA,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }

    /// Orders `(a, b)` as `(in, out)` for this direction.
    #[must_use]
    pub fn orient<T>(self, a: T, b: T) -> (T, T) {
        match self {
            Self::AToB => (a, b),
            Self::BToA => (b, a),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}

/// A swap route: exactly `[token_in, token_out]`.
///
/// Multi-hop routing is not supported, so any other length is rejected.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, SwapPath};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// let path = SwapPath::try_from(&[a, b][..]).expect("two hops");
/// assert_eq!(path.token_in(), a);
/// assert!(SwapPath::try_from(&[a][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapPath {
    token_in: Address,
    token_out: Address,
}

impl SwapPath {
    /// Creates a path from the asset sold to the asset bought.
    #[must_use]
    pub const fn new(token_in: Address, token_out: Address) -> Self {
        Self {
            token_in,
            token_out,
        }
    }

    /// Asset sold into the pool.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Asset bought from the pool.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }
}

impl TryFrom<&[Address]> for SwapPath {
    type Error = SwapError;

    fn try_from(path: &[Address]) -> Result<Self, Self::Error> {
        match path {
            [token_in, token_out] => Ok(Self::new(*token_in, *token_out)),
            _ => Err(SwapError::InvalidPair("path must name exactly two assets")),
        }
    }
}

impl From<[Address; 2]> for SwapPath {
    fn from([token_in, token_out]: [Address; 2]) -> Self {
        Self::new(token_in, token_out)
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.token_in, self.token_out)
    }
}
