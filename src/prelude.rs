//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AddLiquidityReceipt, Address, Amount, BasisPoints, Deadline, Decimals, Direction, FeeTier,
    Liquidity, Price, RemoveLiquidityReceipt, Rounding, SwapPath, SwapReceipt, Timestamp,
    TokenPair,
};
pub use crate::error::{LedgerError, Result, SwapError};
pub use crate::math::CheckedArithmetic;
pub use crate::pool::{
    get_amount_out, min_amount_out, AddLiquidityParams, CallContext, Pool, PoolSnapshot,
    RemoveLiquidityParams, SwapParams,
};
pub use crate::traits::{Clock, Ledger, ManualClock, MemoryLedger, SystemClock};
