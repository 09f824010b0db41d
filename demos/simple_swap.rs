//! Constant product swap walkthrough.
//!
//! Seeds a pool over an in-memory ledger, swaps in both directions, reads
//! spot prices, and withdraws liquidity again.
//!
//! # Run
//!
//! ```bash
//! cargo run --example simple_swap
//! ```

use simple_swap::config::PoolConfig;
use simple_swap::domain::{
    Address, Amount, BasisPoints, Deadline, Decimals, FeeTier, Liquidity, SwapPath,
};
use simple_swap::pool::{
    min_amount_out, AddLiquidityParams, CallContext, Pool, RemoveLiquidityParams, SwapParams,
};
use simple_swap::traits::{Clock, Ledger, MemoryLedger, SystemClock};

const D: Decimals = Decimals::STANDARD;

fn print_pool(pool: &Pool<MemoryLedger>) -> Result<(), Box<dyn std::error::Error>> {
    let snap = pool.snapshot()?;
    println!("  reserve A        = {}", D.format_raw(snap.reserve_a));
    println!("  reserve B        = {}", D.format_raw(snap.reserve_b));
    println!("  total liquidity  = {}", snap.total_liquidity.get());
    match (snap.price_a_to_b, snap.price_b_to_a) {
        (Some(ab), Some(ba)) => println!("  price A→B = {ab}, B→A = {ba}"),
        _ => println!("  pool is empty, no price"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simple Swap (x · y = k) ===\n");

    // ── 1. Accounts and assets ──────────────────────────────────────────
    let token_a = Address::from_bytes([0xA1; 32]);
    let token_b = Address::from_bytes([0xB2; 32]);
    let custody = Address::from_bytes([0xC0; 32]);
    let alice = Address::from_bytes([0x01; 32]);
    let bob = Address::from_bytes([0x02; 32]);

    let mut ledger = MemoryLedger::new();
    for who in [alice, bob] {
        for token in [token_a, token_b] {
            ledger.mint(token, who, D.to_raw(100_000))?;
            ledger.approve(token, who, custody, Amount::MAX)?;
        }
    }

    // ── 2. Configure the pool (0.30% fee) ──────────────────────────────
    let config = PoolConfig::new(token_a, token_b, custody, FeeTier::TIER_0_30_PERCENT)?;
    let mut pool = Pool::new(config, ledger)?;
    let clock = SystemClock;
    println!("Pool created at {} with fee {}\n", clock.now(), pool.fee_tier());

    // ── 3. Seed 50 000 A / 25 000 B ─────────────────────────────────────
    let seeded = pool.add_liquidity(
        &CallContext::at(alice, &clock),
        AddLiquidityParams {
            token_a,
            token_b,
            amount_a_desired: D.to_raw(50_000),
            amount_b_desired: D.to_raw(25_000),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline: Deadline::after(clock.now(), 60),
        },
    )?;
    println!("Alice seeded, minted {} shares", seeded.shares_minted.get());
    print_pool(&pool)?;

    // ── 4. Bob swaps 1 000 A for B with 1% slippage tolerance ──────────
    let amount_in = D.to_raw(1_000);
    let expected = pool.get_amount_out(amount_in, pool.reserve_a(), pool.reserve_b())?;
    let floor = min_amount_out(expected, BasisPoints::new(100))?;
    let receipt = pool.swap_exact_tokens_for_tokens(
        &CallContext::at(bob, &clock),
        SwapParams {
            amount_in,
            amount_out_min: floor,
            path: SwapPath::new(token_a, token_b),
            recipient: bob,
            deadline: Deadline::after(clock.now(), 60),
        },
    )?;
    println!(
        "\nBob swapped {} A → {} B (fee {} A, floor {})",
        D.format_raw(receipt.amount_in),
        D.format_raw(receipt.amount_out),
        D.format_raw(receipt.fee),
        D.format_raw(floor)
    );
    print_pool(&pool)?;

    // ── 5. Slippage protection rejects a greedy floor ───────────────────
    let greedy = pool.swap_exact_tokens_for_tokens(
        &CallContext::at(bob, &clock),
        SwapParams {
            amount_in: D.to_raw(100),
            amount_out_min: D.to_raw(250),
            path: SwapPath::new(token_b, token_a),
            recipient: bob,
            deadline: Deadline::after(clock.now(), 60),
        },
    );
    if let Err(e) = greedy {
        println!("\nGreedy swap rejected: {e}");
    }

    // ── 6. Alice withdraws half her shares ──────────────────────────────
    let half = Liquidity::new(pool.liquidity_of(alice).get() / 2);
    let out = pool.remove_liquidity(
        &CallContext::at(alice, &clock),
        RemoveLiquidityParams {
            token_a,
            token_b,
            liquidity: half,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: alice,
            deadline: Deadline::after(clock.now(), 60),
        },
    )?;
    println!(
        "\nAlice withdrew {} A and {} B",
        D.format_raw(out.amount_a),
        D.format_raw(out.amount_b)
    );
    print_pool(&pool)?;

    let ledger = pool.ledger();
    println!(
        "\nBob now holds {} A and {} B",
        D.format_raw(ledger.balance_of(token_a, bob)),
        D.format_raw(ledger.balance_of(token_b, bob))
    );

    Ok(())
}
