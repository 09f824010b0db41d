//! Serializable read model for front-ends.

use crate::domain::{Address, Amount, FeeTier, Liquidity, Price};

/// Point-in-time view of a pool.
///
/// Prices are `None` while the pool is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    /// First asset.
    pub token_a: Address,
    /// Second asset.
    pub token_b: Address,
    /// Reserve of `token_a`.
    pub reserve_a: Amount,
    /// Reserve of `token_b`.
    pub reserve_b: Amount,
    /// Outstanding shares.
    pub total_liquidity: Liquidity,
    /// Trading fee.
    pub fee_tier: FeeTier,
    /// Units of B per unit of A.
    pub price_a_to_b: Option<Price>,
    /// Units of A per unit of B.
    pub price_b_to_a: Option<Price>,
}
