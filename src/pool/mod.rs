//! The constant-product pool.
//!
//! [`Pool`] owns the reserve bookkeeping for one asset pair and moves the
//! underlying tokens through a [`Ledger`](crate::traits::Ledger).  The pure
//! pieces are exposed as well: [`get_amount_out`] for pricing a trade
//! against arbitrary reserves and [`min_amount_out`] for deriving a slippage
//! bound from an expected output.

mod context;
mod engine;
mod journal;
mod liquidity;
mod oracle;
mod params;
mod snapshot;
mod state;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use context::CallContext;
pub use engine::Pool;
pub use params::{AddLiquidityParams, RemoveLiquidityParams, SwapParams};
pub use snapshot::PoolSnapshot;
pub use state::PoolState;
pub use swap::{get_amount_out, get_amount_out_with_fee, min_amount_out};
