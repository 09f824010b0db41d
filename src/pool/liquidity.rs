//! Share minting and burning.
//!
//! Pure planning functions: given the current [`PoolState`] and the caller's
//! bounds they compute exactly what a deposit takes or a withdrawal pays,
//! without touching the state.
//!
//! # Formulae
//!
//! ```text
//! first deposit:  shares = floor(sqrt(a · b))
//! later deposit:  shares = min(a · L / Ra, b · L / Rb)        (rounded down)
//! withdrawal:     a = Ra · s / L,  b = Rb · s / L             (rounded down)
//! ```

use crate::domain::{Address, Amount, Liquidity, Rounding};
use crate::error::{Result, SwapError};
use crate::math::{mul_div, quote, sqrt_product};

use super::PoolState;

/// What a deposit takes and mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DepositPlan {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
    pub(crate) shares: Liquidity,
}

/// What a withdrawal pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WithdrawalPlan {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
}

/// Plans a deposit against `state`, in pool order (A then B).
///
/// An empty pool takes the desired amounts as they are.  A funded pool takes
/// the largest pair at the current reserve ratio that fits inside the
/// desired amounts.
pub(crate) fn plan_deposit(
    state: &PoolState,
    desired_a: Amount,
    desired_b: Amount,
    min_a: Amount,
    min_b: Amount,
) -> Result<DepositPlan> {
    if desired_a.is_zero() || desired_b.is_zero() {
        return Err(SwapError::InvalidAmount("desired amounts must be positive"));
    }

    let (amount_a, amount_b) = if state.is_empty() {
        (desired_a, desired_b)
    } else {
        let (reserve_a, reserve_b) = (state.reserve_a(), state.reserve_b());
        let b_optimal = quote(desired_a, reserve_a, reserve_b)?;
        if b_optimal <= desired_b {
            (desired_a, b_optimal)
        } else {
            let a_optimal = quote(desired_b, reserve_b, reserve_a)?;
            if a_optimal > desired_a {
                return Err(SwapError::InvariantViolation(
                    "optimal deposit exceeds desired amount",
                ));
            }
            (a_optimal, desired_b)
        }
    };

    check_minimum(amount_a, min_a)?;
    check_minimum(amount_b, min_b)?;

    let shares = if state.is_empty() {
        sqrt_product(amount_a.get(), amount_b.get())
    } else {
        let total = state.total_liquidity().get();
        let by_a = mul_div(amount_a.get(), total, state.reserve_a().get(), Rounding::Down)?;
        let by_b = mul_div(amount_b.get(), total, state.reserve_b().get(), Rounding::Down)?;
        by_a.min(by_b)
    };
    if shares == 0 {
        return Err(SwapError::InvalidAmount("deposit too small to mint liquidity"));
    }

    Ok(DepositPlan {
        amount_a,
        amount_b,
        shares: Liquidity::new(shares),
    })
}

/// Plans burning `shares` held by `provider`, in pool order.
pub(crate) fn plan_withdrawal(
    state: &PoolState,
    provider: Address,
    shares: Liquidity,
    min_a: Amount,
    min_b: Amount,
) -> Result<WithdrawalPlan> {
    if shares.is_zero() {
        return Err(SwapError::InvalidAmount("liquidity amount must be positive"));
    }
    let held = state.liquidity_of(provider);
    if shares > held {
        return Err(SwapError::InsufficientLiquidity {
            requested: shares,
            available: held,
        });
    }
    let total = state.total_liquidity();
    if shares > total {
        return Err(SwapError::InsufficientLiquidity {
            requested: shares,
            available: total,
        });
    }

    let amount_a = pro_rata(state.reserve_a(), shares, total)?;
    let amount_b = pro_rata(state.reserve_b(), shares, total)?;
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(SwapError::InvalidAmount("liquidity burned rounds to zero"));
    }

    check_minimum(amount_a, min_a)?;
    check_minimum(amount_b, min_b)?;

    Ok(WithdrawalPlan { amount_a, amount_b })
}

fn pro_rata(reserve: Amount, shares: Liquidity, total: Liquidity) -> Result<Amount> {
    mul_div(reserve.get(), shares.get(), total.get(), Rounding::Down).map(Amount::new)
}

fn check_minimum(amount: Amount, minimum: Amount) -> Result<()> {
    if amount < minimum {
        return Err(SwapError::SlippageExceeded { amount, minimum });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    fn seeded() -> PoolState {
        let Ok(plan) = plan_deposit(
            &PoolState::new(),
            Amount::new(50_000 * E18),
            Amount::new(25_000 * E18),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected initial plan");
        };
        let mut state = PoolState::new();
        let Ok(staged) = state.stage_deposit(addr(1), plan.amount_a, plan.amount_b, plan.shares)
        else {
            panic!("expected staged state");
        };
        state.apply(staged);
        state
    }

    // -- deposits -----------------------------------------------------------

    #[test]
    fn initial_deposit_is_geometric_mean() {
        let Ok(plan) = plan_deposit(
            &PoolState::new(),
            Amount::new(400),
            Amount::new(100),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.amount_a, Amount::new(400));
        assert_eq!(plan.amount_b, Amount::new(100));
        assert_eq!(plan.shares, Liquidity::new(200));
    }

    #[test]
    fn zero_desired_rejected() {
        let err = plan_deposit(
            &PoolState::new(),
            Amount::ZERO,
            Amount::new(1),
            Amount::ZERO,
            Amount::ZERO,
        );
        assert!(matches!(err, Err(SwapError::InvalidAmount(_))));
    }

    #[test]
    fn funded_deposit_clamps_b_to_ratio() {
        let state = seeded();
        let Ok(plan) = plan_deposit(
            &state,
            Amount::new(1_000 * E18),
            Amount::new(1_000 * E18),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.amount_a, Amount::new(1_000 * E18));
        assert_eq!(plan.amount_b, Amount::new(500 * E18));
        // 2% of the pool
        assert_eq!(
            plan.shares.get(),
            state.total_liquidity().get() / 50
        );
    }

    #[test]
    fn funded_deposit_clamps_a_to_ratio() {
        let state = seeded();
        let Ok(plan) = plan_deposit(
            &state,
            Amount::new(10_000 * E18),
            Amount::new(100 * E18),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.amount_a, Amount::new(200 * E18));
        assert_eq!(plan.amount_b, Amount::new(100 * E18));
    }

    #[test]
    fn clamped_amount_below_minimum_is_slippage() {
        let state = seeded();
        let err = plan_deposit(
            &state,
            Amount::new(1_000 * E18),
            Amount::new(1_000 * E18),
            Amount::ZERO,
            Amount::new(600 * E18),
        );
        assert_eq!(
            err,
            Err(SwapError::SlippageExceeded {
                amount: Amount::new(500 * E18),
                minimum: Amount::new(600 * E18),
            })
        );
    }

    #[test]
    fn dust_deposit_mints_nothing() {
        let err = plan_deposit(
            &PoolState::new(),
            Amount::new(1),
            Amount::new(0),
            Amount::ZERO,
            Amount::ZERO,
        );
        assert!(matches!(err, Err(SwapError::InvalidAmount(_))));

        let state = seeded();
        let err = plan_deposit(&state, Amount::new(1), Amount::new(1), Amount::ZERO, Amount::ZERO);
        assert!(matches!(err, Err(SwapError::InvalidAmount(_))));
    }

    // -- withdrawals --------------------------------------------------------

    #[test]
    fn withdrawal_is_pro_rata() {
        let state = seeded();
        let half = Liquidity::new(state.total_liquidity().get() / 2);
        let Ok(plan) = plan_withdrawal(&state, addr(1), half, Amount::ZERO, Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert!(plan.amount_a <= Amount::new(25_000 * E18));
        assert!(plan.amount_a.get() > 24_999 * E18);
        assert!(plan.amount_b <= Amount::new(12_500 * E18));
    }

    #[test]
    fn withdrawal_of_everything_drains_reserves() {
        let state = seeded();
        let all = state.total_liquidity();
        let Ok(plan) = plan_withdrawal(&state, addr(1), all, Amount::ZERO, Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(plan.amount_a, state.reserve_a());
        assert_eq!(plan.amount_b, state.reserve_b());
    }

    #[test]
    fn withdrawal_beyond_holding() {
        let state = seeded();
        let more = Liquidity::new(state.total_liquidity().get() + 1);
        let Err(SwapError::InsufficientLiquidity { requested, available }) =
            plan_withdrawal(&state, addr(1), more, Amount::ZERO, Amount::ZERO)
        else {
            panic!("expected InsufficientLiquidity");
        };
        assert_eq!(requested, more);
        assert_eq!(available, state.total_liquidity());

        let Err(SwapError::InsufficientLiquidity { available, .. }) =
            plan_withdrawal(&state, addr(2), Liquidity::new(1), Amount::ZERO, Amount::ZERO)
        else {
            panic!("expected InsufficientLiquidity");
        };
        assert_eq!(available, Liquidity::ZERO);
    }

    #[test]
    fn withdrawal_minimums() {
        let state = seeded();
        let all = state.total_liquidity();
        let err = plan_withdrawal(
            &state,
            addr(1),
            all,
            Amount::new(50_000 * E18 + 1),
            Amount::ZERO,
        );
        assert!(matches!(err, Err(SwapError::SlippageExceeded { .. })));
    }

    #[test]
    fn zero_withdrawal_rejected() {
        let err = plan_withdrawal(&seeded(), addr(1), Liquidity::ZERO, Amount::ZERO, Amount::ZERO);
        assert!(matches!(err, Err(SwapError::InvalidAmount(_))));
    }
}
