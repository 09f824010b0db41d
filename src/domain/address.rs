//! Chain-agnostic 32-byte identity for assets and accounts.

use core::fmt;
use core::str::FromStr;

use crate::error::SwapError;

/// A 32-byte identity naming either an asset or an account.
///
/// The all-zero value is the *null* identity.  It is a legal value of the
/// type but is rejected wherever an asset or recipient is required.
///
/// Addresses render as `0x`-prefixed lowercase hex and parse from the same
/// form.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Address;
///
/// let addr = Address::from_bytes([0xab; 32]);
/// let text = addr.to_string();
/// assert!(text.starts_with("0xabab"));
/// assert_eq!(text.parse::<Address>().ok(), Some(addr));
/// assert!(Address::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 32]);

impl Address {
    /// The null identity.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the null identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { .. } => {
                SwapError::InvalidToken("address is not valid hex")
            }
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                SwapError::InvalidToken("address must be 32 hex-encoded bytes")
            }
        })?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
