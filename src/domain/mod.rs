//! Value types for the two-asset pool.
//!
//! Quantities, identities, rates and times are newtypes over integers so that
//! a share count can never be passed where a token amount is expected.

mod address;
mod amount;
mod basis_points;
mod decimals;
mod fee_tier;
mod liquidity;
mod price;
mod receipts;
mod rounding;
mod swap_path;
mod timestamp;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub(crate) use basis_points::BPS_DENOMINATOR;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use liquidity::Liquidity;
pub use price::Price;
pub use receipts::{AddLiquidityReceipt, RemoveLiquidityReceipt, SwapReceipt};
pub use rounding::Rounding;
pub use swap_path::{Direction, SwapPath};
pub use timestamp::{Deadline, Timestamp};
pub use token_pair::TokenPair;
