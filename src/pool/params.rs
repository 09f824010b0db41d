//! Arguments of the mutating pool operations.

use crate::domain::{Address, Amount, Deadline, Liquidity, SwapPath};

/// Arguments of [`Pool::add_liquidity`](super::Pool::add_liquidity).
///
/// `token_a` and `token_b` may name the pool's pair in either order; the
/// desired and minimum amounts follow the order given here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidityParams {
    /// First asset named by the caller.
    pub token_a: Address,
    /// Second asset named by the caller.
    pub token_b: Address,
    /// Upper bound on `token_a` taken.
    pub amount_a_desired: Amount,
    /// Upper bound on `token_b` taken.
    pub amount_b_desired: Amount,
    /// Lower bound on `token_a` taken.
    pub amount_a_min: Amount,
    /// Lower bound on `token_b` taken.
    pub amount_b_min: Amount,
    /// Account credited with the minted shares.
    pub recipient: Address,
    /// Latest time the deposit may execute.
    pub deadline: Deadline,
}

/// Arguments of [`Pool::remove_liquidity`](super::Pool::remove_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveLiquidityParams {
    /// First asset named by the caller.
    pub token_a: Address,
    /// Second asset named by the caller.
    pub token_b: Address,
    /// Shares to burn from the caller's balance.
    pub liquidity: Liquidity,
    /// Lower bound on `token_a` paid out.
    pub amount_a_min: Amount,
    /// Lower bound on `token_b` paid out.
    pub amount_b_min: Amount,
    /// Account receiving both assets.
    pub recipient: Address,
    /// Latest time the withdrawal may execute.
    pub deadline: Deadline,
}

/// Arguments of
/// [`Pool::swap_exact_tokens_for_tokens`](super::Pool::swap_exact_tokens_for_tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapParams {
    /// Exact input taken from the caller.
    pub amount_in: Amount,
    /// Smallest acceptable output.
    pub amount_out_min: Amount,
    /// `[token_in, token_out]`.
    pub path: SwapPath,
    /// Account receiving the output.
    pub recipient: Address,
    /// Latest time the swap may execute.
    pub deadline: Deadline,
}
