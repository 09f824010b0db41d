//! Declarative pool configuration.
//!
//! [`PoolConfig`] fixes everything about a pool that never changes after
//! construction: the asset pair, the custody account and the fee.

mod pool_config;

pub use pool_config::PoolConfig;
