//! Outcomes returned by committed pool operations.

use super::{Address, Amount, Liquidity};

/// Result of a committed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddLiquidityReceipt {
    /// Token A actually taken from the caller.
    pub amount_a: Amount,
    /// Token B actually taken from the caller.
    pub amount_b: Amount,
    /// Shares credited to the recipient.
    pub shares_minted: Liquidity,
}

/// Result of a committed withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveLiquidityReceipt {
    /// Token A paid to the recipient.
    pub amount_a: Amount,
    /// Token B paid to the recipient.
    pub amount_b: Amount,
}

/// Result of a committed swap.
///
/// `amount_in` is the gross amount taken from the caller; `fee` is the part
/// of it retained by the pool before pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapReceipt {
    /// Asset sold.
    pub token_in: Address,
    /// Asset bought.
    pub token_out: Address,
    /// Gross input taken from the caller.
    pub amount_in: Amount,
    /// Output paid to the recipient.
    pub amount_out: Amount,
    /// Fee retained in the input reserve.
    pub fee: Amount,
}
