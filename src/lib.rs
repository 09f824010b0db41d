//! # Simple Swap
//!
//! A two-asset constant-product market maker: reserve accounting,
//! liquidity shares, and slippage-protected swaps over a pluggable token
//! ledger.
//!
//! The engine is the [`Pool`](pool::Pool).  It holds reserves of exactly two
//! assets, mints shares to liquidity providers, and trades one asset for the
//! other at the price set by `reserve_a · reserve_b = k`.  Token balances
//! live in a [`Ledger`](traits::Ledger) supplied by the host; the pool only
//! keeps bookkeeping and asks the ledger to move funds.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | `Serialize`/`Deserialize` for config, value types and snapshots |
//!
//! # Quick Start
//!
//! ```rust
//! use simple_swap::config::PoolConfig;
//! use simple_swap::domain::{
//!     Address, Amount, Deadline, Decimals, FeeTier, Price, SwapPath, Timestamp,
//! };
//! use simple_swap::pool::{AddLiquidityParams, CallContext, Pool, SwapParams};
//! use simple_swap::traits::{Ledger, MemoryLedger};
//!
//! let token_a = Address::from_bytes([0xA1; 32]);
//! let token_b = Address::from_bytes([0xB2; 32]);
//! let custody = Address::from_bytes([0xC0; 32]);
//! let owner = Address::from_bytes([0x01; 32]);
//! let d = Decimals::STANDARD;
//!
//! // 1. Fund the owner and let the pool pull from them
//! let mut ledger = MemoryLedger::new();
//! for token in [token_a, token_b] {
//!     ledger.mint(token, owner, d.to_raw(100_000)).expect("mint");
//!     ledger.approve(token, owner, custody, Amount::MAX).expect("approve");
//! }
//!
//! // 2. Create the pool and seed it with 50,000 A / 25,000 B
//! let config = PoolConfig::new(token_a, token_b, custody, FeeTier::ZERO).expect("valid config");
//! let mut pool = Pool::new(config, ledger).expect("valid pool");
//! let ctx = CallContext::new(owner, Timestamp::from_secs(1_700_000_000));
//! pool.add_liquidity(&ctx, AddLiquidityParams {
//!     token_a,
//!     token_b,
//!     amount_a_desired: d.to_raw(50_000),
//!     amount_b_desired: d.to_raw(25_000),
//!     amount_a_min: Amount::ZERO,
//!     amount_b_min: Amount::ZERO,
//!     recipient: owner,
//!     deadline: Deadline::after(ctx.now(), 600),
//! })
//! .expect("seeded");
//!
//! // 3. Sell 1,000 A
//! let receipt = pool
//!     .swap_exact_tokens_for_tokens(&ctx, SwapParams {
//!         amount_in: d.to_raw(1_000),
//!         amount_out_min: Amount::ZERO,
//!         path: SwapPath::new(token_a, token_b),
//!         recipient: owner,
//!         deadline: Deadline::after(ctx.now(), 600),
//!     })
//!     .expect("swap");
//! assert!(receipt.amount_out < d.to_raw(500));
//!
//! // 4. Selling A made A cheaper
//! let price = pool.get_price(token_a, token_b).expect("funded");
//! assert!(price.raw() < Price::SCALE / 2);
//! assert!(price.to_string().starts_with("0.48"));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`TokenPair`](domain::TokenPair), receipts |
//! | [`math`]   | Checked arithmetic, explicit rounding, 256-bit `mul_div` and `sqrt` |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`traits`] | Collaborator seams: [`Ledger`](traits::Ledger), [`Clock`](traits::Clock) and in-memory implementations |
//! | [`pool`]   | [`Pool`](pool::Pool), pricing functions, snapshots |
//! | [`error`]  | [`SwapError`](error::SwapError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Committed operations emit `tracing` events at `DEBUG`; a rollback after
//! a failed ledger movement emits `WARN`.  The crate never installs a
//! subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
