//! Spot price from current reserves.

use crate::domain::{Address, Price, TokenPair};
use crate::error::Result;

use super::PoolState;

/// `reserve_out · 10^18 / reserve_in` for a `token_in → token_out` query.
///
/// Any query that does not name the pair (null, foreign or repeated
/// identities) fails with `InvalidPair`, and an empty pool with
/// `InvalidAmount`.
pub(crate) fn spot_price(
    state: &PoolState,
    pair: &TokenPair,
    token_in: Address,
    token_out: Address,
) -> Result<Price> {
    let direction = pair.direction(token_in, token_out)?;
    let (reserve_in, reserve_out) = state.reserves_for(direction);
    Price::from_reserves(reserve_in, reserve_out)
}
