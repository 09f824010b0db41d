//! The asset-ledger capability a pool moves tokens through.
//!
//! A [`Pool`](crate::pool::Pool) never owns balances of its own.  It keeps
//! reserve bookkeeping and asks a [`Ledger`] to move the underlying assets
//! between the caller, the recipient and its custody account.  Any
//! multi-asset ledger with ERC-20 style approvals can back a pool.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::{LedgerError, SwapError};

/// Multi-asset balance and allowance bookkeeping.
///
/// Every method is keyed by the asset's `token` identity.  Failures are
/// reported as [`LedgerError`] and propagated by the pool unchanged.
pub trait Ledger {
    /// Balance of `owner` in `token`.
    fn balance_of(&self, token: Address, owner: Address) -> Amount;

    /// Amount of `owner`'s `token` that `spender` may still move.
    fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s `token` to `amount`.
    ///
    /// # Errors
    ///
    /// Implementations may refuse the approval.
    fn approve(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if `from` holds less
    /// than `amount`.
    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `owner`'s `token` to `to` on behalf of `spender`,
    /// consuming `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientAllowance`] if the approval is
    /// too small and [`LedgerError::InsufficientBalance`] if `owner` holds
    /// less than `amount`.
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}

/// In-memory [`Ledger`] backed by hash maps.
///
/// Used by tests, the demo, and any host that has no ledger of its own.
/// Total supply per token is tracked so balances can never overflow.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Amount};
/// use simple_swap::traits::{Ledger, MemoryLedger};
///
/// let token = Address::from_bytes([1u8; 32]);
/// let alice = Address::from_bytes([2u8; 32]);
/// let bob = Address::from_bytes([3u8; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(100)).expect("fits");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance_of(token, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    balances: HashMap<(Address, Address), Amount>,
    allowances: HashMap<(Address, Address, Address), Amount>,
    supply: HashMap<Address, Amount>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `amount` new units of `token` and credits them to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the token's total supply would
    /// exceed `u128::MAX`.
    pub fn mint(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), SwapError> {
        let supply = self.supply.entry(token).or_default();
        *supply = supply
            .checked_add(&amount)
            .ok_or(SwapError::Overflow("token supply overflow"))?;
        self.credit(token, to, amount);
        Ok(())
    }

    /// Total units of `token` ever minted.
    #[must_use]
    pub fn total_supply(&self, token: Address) -> Amount {
        self.supply.get(&token).copied().unwrap_or_default()
    }

    fn credit(&mut self, token: Address, owner: Address, amount: Amount) {
        let balance = self.balances.entry((token, owner)).or_default();
        // bounded by total supply
        *balance = Amount::new(balance.get().saturating_add(amount.get()));
    }

    fn debit(&mut self, token: Address, owner: Address, amount: Amount) -> Result<(), LedgerError> {
        let available = self.balance_of(token, owner);
        let Some(left) = available.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientBalance {
                token,
                owner,
                available,
                requested: amount,
            });
        };
        self.balances.insert((token, owner), left);
        Ok(())
    }
}

impl Ledger for MemoryLedger {
    fn balance_of(&self, token: Address, owner: Address) -> Amount {
        self.balances
            .get(&(token, owner))
            .copied()
            .unwrap_or_default()
    }

    fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(
        &mut self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.allowances.insert((token, owner, spender), amount);
        Ok(())
    }

    fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.debit(token, from, amount)?;
        self.credit(token, to, amount);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.allowance(token, owner, spender);
        let Some(left) = available.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientAllowance {
                token,
                owner,
                spender,
                available,
                requested: amount,
            });
        };
        self.debit(token, owner, amount)?;
        self.allowances.insert((token, owner, spender), left);
        self.credit(token, to, amount);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    const TOKEN: u8 = 1;
    const ALICE: u8 = 2;
    const BOB: u8 = 3;
    const POOL: u8 = 4;

    fn funded() -> MemoryLedger {
        let mut ledger = MemoryLedger::new();
        let Ok(()) = ledger.mint(addr(TOKEN), addr(ALICE), Amount::new(1_000)) else {
            panic!("expected mint");
        };
        ledger
    }

    #[test]
    fn mint_tracks_supply() {
        let mut ledger = funded();
        assert_eq!(ledger.total_supply(addr(TOKEN)), Amount::new(1_000));
        let Err(SwapError::Overflow(_)) = ledger.mint(addr(TOKEN), addr(BOB), Amount::MAX) else {
            panic!("expected Overflow");
        };
        assert_eq!(ledger.balance_of(addr(TOKEN), addr(BOB)), Amount::ZERO);
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded();
        assert_eq!(
            ledger.transfer(addr(TOKEN), addr(ALICE), addr(BOB), Amount::new(300)),
            Ok(())
        );
        assert_eq!(ledger.balance_of(addr(TOKEN), addr(ALICE)), Amount::new(700));
        assert_eq!(ledger.balance_of(addr(TOKEN), addr(BOB)), Amount::new(300));
    }

    #[test]
    fn transfer_insufficient_balance_leaves_state() {
        let mut ledger = funded();
        let err = ledger.transfer(addr(TOKEN), addr(ALICE), addr(BOB), Amount::new(1_001));
        assert_eq!(
            err,
            Err(LedgerError::InsufficientBalance {
                token: addr(TOKEN),
                owner: addr(ALICE),
                available: Amount::new(1_000),
                requested: Amount::new(1_001),
            })
        );
        assert_eq!(ledger.balance_of(addr(TOKEN), addr(BOB)), Amount::ZERO);
    }

    #[test]
    fn transfer_to_self_is_neutral() {
        let mut ledger = funded();
        assert_eq!(
            ledger.transfer(addr(TOKEN), addr(ALICE), addr(ALICE), Amount::new(10)),
            Ok(())
        );
        assert_eq!(ledger.balance_of(addr(TOKEN), addr(ALICE)), Amount::new(1_000));
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded();
        let Ok(()) = ledger.approve(addr(TOKEN), addr(ALICE), addr(POOL), Amount::new(500)) else {
            panic!("expected approve");
        };
        assert_eq!(
            ledger.transfer_from(
                addr(TOKEN),
                addr(POOL),
                addr(ALICE),
                addr(POOL),
                Amount::new(200)
            ),
            Ok(())
        );
        assert_eq!(
            ledger.allowance(addr(TOKEN), addr(ALICE), addr(POOL)),
            Amount::new(300)
        );
        assert_eq!(ledger.balance_of(addr(TOKEN), addr(POOL)), Amount::new(200));
    }

    #[test]
    fn transfer_from_without_approval_fails() {
        let mut ledger = funded();
        let err =
            ledger.transfer_from(addr(TOKEN), addr(POOL), addr(ALICE), addr(POOL), Amount::new(1));
        let Err(LedgerError::InsufficientAllowance { available, .. }) = err else {
            panic!("expected InsufficientAllowance");
        };
        assert_eq!(available, Amount::ZERO);
    }

    #[test]
    fn transfer_from_insufficient_balance_keeps_allowance() {
        let mut ledger = funded();
        let Ok(()) = ledger.approve(addr(TOKEN), addr(ALICE), addr(POOL), Amount::MAX) else {
            panic!("expected approve");
        };
        let err = ledger.transfer_from(
            addr(TOKEN),
            addr(POOL),
            addr(ALICE),
            addr(POOL),
            Amount::new(5_000),
        );
        assert!(matches!(err, Err(LedgerError::InsufficientBalance { .. })));
        assert_eq!(ledger.allowance(addr(TOKEN), addr(ALICE), addr(POOL)), Amount::MAX);
    }
}
