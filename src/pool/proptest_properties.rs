//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Invariant preservation**: `k` never decreases across a swap.
//! 2. **Proportional minting**: shares track the deposit's share of reserves.
//! 3. **Round-trip**: add then remove returns no more than was deposited.
//! 4. **Slippage enforcement**: the bound is exact.
//! 5. **Deadline enforcement**: expired calls fail before anything else.
//! 6. **Price inversion**: `P(A,B) · P(B,A)` stays within rounding of 10^36.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    Address, Amount, Deadline, FeeTier, Liquidity, Price, SwapPath, Timestamp,
};
use crate::error::SwapError;
use crate::math::{product, U256};
use crate::traits::{Ledger, MemoryLedger};

use super::{AddLiquidityParams, CallContext, Pool, RemoveLiquidityParams, SwapParams};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const NOW: u64 = 1_700_000_000;

fn token_a() -> Address {
    Address::from_bytes([0xA1; 32])
}

fn token_b() -> Address {
    Address::from_bytes([0xB2; 32])
}

fn custody() -> Address {
    Address::from_bytes([0xC0; 32])
}

fn lp() -> Address {
    Address::from_bytes([0x01; 32])
}

fn trader() -> Address {
    Address::from_bytes([0x02; 32])
}

fn ctx(caller: Address) -> CallContext {
    CallContext::new(caller, Timestamp::from_secs(NOW))
}

fn funded_ledger() -> MemoryLedger {
    let mut ledger = MemoryLedger::new();
    for who in [lp(), trader()] {
        for token in [token_a(), token_b()] {
            let Ok(()) = ledger.mint(token, who, Amount::new(u128::MAX / 4)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(token, who, custody(), Amount::MAX) else {
                panic!("approve");
            };
        }
    }
    ledger
}

fn add_params(a: u128, b: u128, recipient: Address) -> AddLiquidityParams {
    AddLiquidityParams {
        token_a: token_a(),
        token_b: token_b(),
        amount_a_desired: Amount::new(a),
        amount_b_desired: Amount::new(b),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient,
        deadline: Deadline::NEVER,
    }
}

fn swap_params(amount_in: u128, a_to_b: bool) -> SwapParams {
    let path = if a_to_b {
        SwapPath::new(token_a(), token_b())
    } else {
        SwapPath::new(token_b(), token_a())
    };
    SwapParams {
        amount_in: Amount::new(amount_in),
        amount_out_min: Amount::ZERO,
        path,
        recipient: trader(),
        deadline: Deadline::NEVER,
    }
}

fn make_pool(ra: u128, rb: u128, fee_bps: u32) -> Pool<MemoryLedger> {
    let fee = FeeTier::new(crate::domain::BasisPoints::new(fee_bps));
    let Ok(config) = PoolConfig::new(token_a(), token_b(), custody(), fee) else {
        panic!("valid config");
    };
    let Ok(mut pool) = Pool::new(config, funded_ledger()) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(&ctx(lp()), add_params(ra, rb, lp())) else {
        panic!("seed");
    };
    pool
}

fn k(pool: &Pool<MemoryLedger>) -> U256 {
    product(pool.reserve_a().get(), pool.reserve_b().get())
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves from one thousand units up to a trillion 18-decimal tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000_000_000_000u128
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(5), Just(30), Just(100)]
}

// ---------------------------------------------------------------------------
// 1. Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swaps_never_decrease_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        trades in prop::collection::vec((1u128..=1_000_000u128, any::<bool>()), 1..8),
    ) {
        let mut pool = make_pool(ra, rb, fee);
        for (per_million, a_to_b) in trades {
            let reserve_in = if a_to_b { pool.reserve_a() } else { pool.reserve_b() };
            let amount_in = (reserve_in.get() / 1_000_000).saturating_mul(per_million).max(1);
            let before = k(&pool);
            let result =
                pool.swap_exact_tokens_for_tokens(&ctx(trader()), swap_params(amount_in, a_to_b));
            if result.is_ok() {
                prop_assert!(k(&pool) >= before, "k decreased");
            } else {
                prop_assert_eq!(k(&pool), before);
            }
            prop_assert_eq!(pool.state().check_invariants(), Ok(()));
            prop_assert_eq!(
                pool.ledger().balance_of(token_a(), custody()),
                pool.reserve_a()
            );
            prop_assert_eq!(
                pool.ledger().balance_of(token_b(), custody()),
                pool.reserve_b()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Proportional minting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_minting_is_proportional(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        deposit in 1u128..=1_000_000_000_000_000_000_000_000u128,
    ) {
        let mut pool = make_pool(ra, rb, 0);
        let total_before = pool.total_liquidity().get();
        let reserve_a_before = pool.reserve_a().get();
        let reserve_b_before = pool.reserve_b().get();

        let Ok(receipt) = pool.add_liquidity(
            &ctx(trader()),
            add_params(deposit, u128::MAX / 8, trader()),
        ) else {
            return Ok(());
        };

        // shares / L <= amount / R for both assets: minting never over-credits
        let shares = receipt.shares_minted.get();
        prop_assert!(
            product(shares, reserve_a_before) <= product(receipt.amount_a.get(), total_before)
        );
        prop_assert!(
            product(shares, reserve_b_before) <= product(receipt.amount_b.get(), total_before)
        );
        // and falls short by less than one share's worth of either reserve
        prop_assert!(
            product(shares + 1, reserve_a_before) > product(receipt.amount_a.get(), total_before)
                || product(shares + 1, reserve_b_before)
                    > product(receipt.amount_b.get(), total_before)
        );
        prop_assert_eq!(pool.liquidity_of(trader()), receipt.shares_minted);
    }
}

// ---------------------------------------------------------------------------
// 3. Round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        deposit_a in 1_000u128..=1_000_000_000_000_000_000_000u128,
        deposit_b in 1_000u128..=1_000_000_000_000_000_000_000u128,
    ) {
        let mut pool = make_pool(ra, rb, 0);
        let Ok(added) = pool.add_liquidity(
            &ctx(trader()),
            add_params(deposit_a, deposit_b, trader()),
        ) else {
            return Ok(());
        };
        let removal = RemoveLiquidityParams {
            token_a: token_a(),
            token_b: token_b(),
            liquidity: added.shares_minted,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: trader(),
            deadline: Deadline::NEVER,
        };
        let Ok(removed) = pool.remove_liquidity(&ctx(trader()), removal) else {
            return Ok(());
        };
        prop_assert!(removed.amount_a <= added.amount_a);
        prop_assert!(removed.amount_b <= added.amount_b);
        prop_assert_eq!(pool.liquidity_of(trader()), Liquidity::ZERO);
    }
}

// ---------------------------------------------------------------------------
// 4. Slippage enforcement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_slippage_bound_is_exact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        per_thousand in 1u128..=1_000u128,
        a_to_b in any::<bool>(),
    ) {
        let pool = make_pool(ra, rb, 30);
        let (reserve_in, reserve_out) = if a_to_b {
            (pool.reserve_a(), pool.reserve_b())
        } else {
            (pool.reserve_b(), pool.reserve_a())
        };
        let amount_in = (reserve_in.get() / 1_000).saturating_mul(per_thousand).max(1);
        let Ok(expected) = pool.get_amount_out(Amount::new(amount_in), reserve_in, reserve_out)
        else {
            return Ok(());
        };
        prop_assume!(!expected.is_zero());

        let mut too_strict = pool.clone();
        let mut params = swap_params(amount_in, a_to_b);
        params.amount_out_min = Amount::new(expected.get() + 1);
        let is_slippage = matches!(
            too_strict.swap_exact_tokens_for_tokens(&ctx(trader()), params),
            Err(SwapError::SlippageExceeded { .. })
        );
        prop_assert!(is_slippage);
        prop_assert_eq!(too_strict.state(), pool.state());

        let mut exact = pool.clone();
        params.amount_out_min = expected;
        let Ok(receipt) = exact.swap_exact_tokens_for_tokens(&ctx(trader()), params) else {
            return Err(TestCaseError::fail("swap at the exact bound must succeed"));
        };
        prop_assert_eq!(receipt.amount_out, expected);
    }
}

// ---------------------------------------------------------------------------
// 5. Deadline enforcement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_expired_calls_always_fail(
        late_by in 1u64..=1_000_000u64,
        amount in any::<u128>(),
        op in 0u8..3,
    ) {
        let mut pool = make_pool(1_000_000, 1_000_000, 0);
        let before = pool.state().clone();
        let deadline = Deadline::new(Timestamp::from_secs(NOW - late_by));
        let result = match op {
            0 => {
                let mut params = add_params(amount, amount, lp());
                params.deadline = deadline;
                pool.add_liquidity(&ctx(lp()), params).map(|_| ())
            }
            1 => {
                let params = RemoveLiquidityParams {
                    token_a: Address::ZERO,
                    token_b: token_b(),
                    liquidity: Liquidity::new(amount),
                    amount_a_min: Amount::ZERO,
                    amount_b_min: Amount::ZERO,
                    recipient: lp(),
                    deadline,
                };
                pool.remove_liquidity(&ctx(lp()), params).map(|_| ())
            }
            _ => {
                let mut params = swap_params(amount, true);
                params.deadline = deadline;
                pool.swap_exact_tokens_for_tokens(&ctx(trader()), params).map(|_| ())
            }
        };
        let is_expired = matches!(result, Err(SwapError::Expired { .. }));
        prop_assert!(is_expired);
        prop_assert_eq!(pool.state(), &before);
    }
}

// ---------------------------------------------------------------------------
// 6. Price inversion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_prices_are_inverse(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_pool(ra, rb, 0);
        let (Ok(ab), Ok(ba)) = (
            pool.get_price(token_a(), token_b()),
            pool.get_price(token_b(), token_a()),
        ) else {
            return Ok(());
        };
        let one = product(Price::SCALE, Price::SCALE);
        let both = product(ab.raw(), ba.raw());
        prop_assert!(both <= one);
        // each floor loses less than one unit, scaled by the other factor
        let slack = U256::from(ab.raw()) + U256::from(ba.raw()) + U256::from(1u8);
        prop_assert!(both + slack >= one);
    }
}
