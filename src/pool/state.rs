//! Reserve and share bookkeeping.
//!
//! [`PoolState`] is a plain value.  Each operation stages only the fields it
//! changes with one of the `stage_*` methods, validates the staged value,
//! and then applies it to the live state.  Applying returns the replaced
//! values, which is all a rollback needs.

use std::collections::BTreeMap;

use crate::domain::{Address, Amount, Direction, Liquidity};
use crate::error::{Result, SwapError};
use crate::math::CheckedArithmetic;

/// Reserves, total share supply and per-provider share balances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    providers: BTreeMap<Address, Liquidity>,
}

impl PoolState {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve of token A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of token B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Outstanding shares.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// Shares held by `provider`.
    #[must_use]
    pub fn liquidity_of(&self, provider: Address) -> Liquidity {
        self.providers.get(&provider).copied().unwrap_or_default()
    }

    /// Iterates over providers with a non-zero balance.
    pub fn providers(&self) -> impl Iterator<Item = (Address, Liquidity)> + '_ {
        self.providers.iter().map(|(addr, shares)| (*addr, *shares))
    }

    /// `true` when the pool holds no reserves and no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_liquidity.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a trade in `direction`.
    pub fn reserves_for(&self, direction: Direction) -> (Amount, Amount) {
        direction.orient(self.reserve_a, self.reserve_b)
    }

    /// Verifies that the pool is either empty or funded on every axis, and
    /// that provider balances add up to the total supply.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvariantViolation`] naming the broken rule.
    pub fn check_invariants(&self) -> Result<()> {
        check_funding(self.reserve_a, self.reserve_b, self.total_liquidity)?;
        let mut sum = Liquidity::ZERO;
        for shares in self.providers.values() {
            if shares.is_zero() {
                return Err(SwapError::InvariantViolation(
                    "provider entry with zero shares",
                ));
            }
            sum = sum
                .checked_add(shares)
                .ok_or(SwapError::InvariantViolation("provider shares overflow"))?;
        }
        if sum != self.total_liquidity {
            return Err(SwapError::InvariantViolation(
                "provider shares do not sum to total liquidity",
            ));
        }
        Ok(())
    }

    /// Stages a deposit of `amount_a`/`amount_b` that credits `shares` to
    /// `recipient`.
    pub(crate) fn stage_deposit(
        &self,
        recipient: Address,
        amount_a: Amount,
        amount_b: Amount,
        shares: Liquidity,
    ) -> Result<Staged> {
        let held = self.liquidity_of(recipient).safe_add(&shares)?;
        Ok(Staged {
            reserve_a: self.reserve_a.safe_add(&amount_a)?,
            reserve_b: self.reserve_b.safe_add(&amount_b)?,
            total_liquidity: self.total_liquidity.safe_add(&shares)?,
            provider: Some((recipient, held)),
        })
    }

    /// Stages burning `shares` from `provider` and paying out
    /// `amount_a`/`amount_b`.
    pub(crate) fn stage_withdrawal(
        &self,
        provider: Address,
        shares: Liquidity,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Staged> {
        let held = self.liquidity_of(provider);
        let left = held.checked_sub(&shares).ok_or(SwapError::InsufficientLiquidity {
            requested: shares,
            available: held,
        })?;
        Ok(Staged {
            reserve_a: self.reserve_a.safe_sub(&amount_a)?,
            reserve_b: self.reserve_b.safe_sub(&amount_b)?,
            total_liquidity: self.total_liquidity.safe_sub(&shares)?,
            provider: Some((provider, left)),
        })
    }

    /// Stages a trade in `direction` that adds `amount_in` to the input
    /// reserve and removes `amount_out` from the output reserve.  Share
    /// balances are not part of the staged value.
    pub(crate) fn stage_swap(
        &self,
        direction: Direction,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<Staged> {
        let (reserve_a, reserve_b) = match direction {
            Direction::AToB => (
                self.reserve_a.safe_add(&amount_in)?,
                self.reserve_b.safe_sub(&amount_out)?,
            ),
            Direction::BToA => (
                self.reserve_a.safe_sub(&amount_out)?,
                self.reserve_b.safe_add(&amount_in)?,
            ),
        };
        Ok(Staged {
            reserve_a,
            reserve_b,
            total_liquidity: self.total_liquidity,
            provider: None,
        })
    }

    /// Writes `staged` into the live state and returns the values it
    /// replaced.  Applying the returned value undoes the change.
    pub(crate) fn apply(&mut self, staged: Staged) -> Staged {
        let previous = Staged {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_liquidity: self.total_liquidity,
            provider: staged.provider.map(|(who, _)| (who, self.liquidity_of(who))),
        };
        self.reserve_a = staged.reserve_a;
        self.reserve_b = staged.reserve_b;
        self.total_liquidity = staged.total_liquidity;
        if let Some((who, shares)) = staged.provider {
            self.set_balance(who, shares);
        }
        previous
    }

    fn set_balance(&mut self, provider: Address, shares: Liquidity) {
        if shares.is_zero() {
            self.providers.remove(&provider);
        } else {
            self.providers.insert(provider, shares);
        }
    }
}

/// The fields one operation changes: new reserves, new total supply and at
/// most one provider's new share balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Staged {
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    provider: Option<(Address, Liquidity)>,
}

impl Staged {
    pub(crate) const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    pub(crate) const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Checks the staged values before they are applied.
    ///
    /// The provider sum is maintained by construction (the total moves by
    /// exactly the provider's delta), so only the all-or-nothing rule and
    /// the provider's bound against the total are checked here.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvariantViolation`] naming the broken rule.
    pub(crate) fn check_invariants(&self) -> Result<()> {
        check_funding(self.reserve_a, self.reserve_b, self.total_liquidity)?;
        if let Some((_, shares)) = self.provider {
            if shares > self.total_liquidity {
                return Err(SwapError::InvariantViolation(
                    "provider holds more than the total supply",
                ));
            }
        }
        Ok(())
    }
}

fn check_funding(reserve_a: Amount, reserve_b: Amount, total: Liquidity) -> Result<()> {
    let empty_a = reserve_a.is_zero();
    let empty_b = reserve_b.is_zero();
    let empty_l = total.is_zero();
    if empty_a != empty_b || empty_b != empty_l {
        return Err(SwapError::InvariantViolation(
            "reserves and supply must be all zero or all positive",
        ));
    }
    Ok(())
}
