//! Overflow-safe integer arithmetic for pool calculations.
//!
//! [`CheckedArithmetic`] maps failed `u128` operations onto typed errors,
//! [`div_round`] makes every division's rounding explicit, and the wide
//! helpers ([`mul_div`], [`sqrt_product`], [`product`]) carry reserve
//! products in 256 bits.

mod checked;
mod quote;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use quote::quote;
pub use rounding::div_round;
pub use wide::{mul_div, product, sqrt_product, U256};
