//! Configuration for a two-asset constant-product pool.

use crate::domain::{Address, FeeTier, TokenPair};
use crate::error::SwapError;

/// Immutable parameters of a [`Pool`](crate::pool::Pool).
///
/// # Validation
///
/// - The token pair holds two distinct, non-null identities.
/// - `custody`, the ledger account that holds the reserves, is non-null and
///   differs from both token identities.
/// - The fee tier is at most 100%.
///
/// With the `serde` feature the config reads from a flat document; the fee
/// defaults to zero when omitted:
///
/// ```json
/// { "token_a": "0x01…", "token_b": "0x02…", "custody": "0x03…", "fee_tier": 30 }
/// ```
///
/// Deserialization does not validate; call [`PoolConfig::validate`] (or hand
/// the config to [`Pool::new`](crate::pool::Pool::new), which does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    #[cfg_attr(feature = "serde", serde(flatten))]
    token_pair: TokenPair,
    custody: Address,
    #[cfg_attr(feature = "serde", serde(default))]
    fee_tier: FeeTier,
}

impl PoolConfig {
    /// Creates and validates a config.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidToken`] for a null or repeated token identity.
    /// - [`SwapError::InvalidConfiguration`] for a bad custody account or fee.
    pub fn new(
        token_a: Address,
        token_b: Address,
        custody: Address,
        fee_tier: FeeTier,
    ) -> Result<Self, SwapError> {
        let config = Self {
            token_pair: TokenPair::new(token_a, token_b)?,
            custody,
            fee_tier,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PoolConfig::new`].
    pub fn validate(&self) -> Result<(), SwapError> {
        self.token_pair.validate()?;
        if self.custody.is_zero() {
            return Err(SwapError::InvalidConfiguration(
                "custody account must not be null",
            ));
        }
        if self.token_pair.contains(&self.custody) {
            return Err(SwapError::InvalidConfiguration(
                "custody account must differ from both tokens",
            ));
        }
        if !self.fee_tier.basis_points().is_valid_percent() {
            return Err(SwapError::InvalidConfiguration(
                "fee tier must not exceed 10000 bp",
            ));
        }
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the ledger account holding the reserves.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }

    /// Returns the trading fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}
