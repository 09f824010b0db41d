//! Ledger interactions with undo.
//!
//! A pool operation commits its new state first and then performs one or
//! two [`Movement`]s through the ledger.  If a later movement fails, the
//! earlier ones are reversed so the operation leaves no trace on either
//! side.

use tracing::error;

use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::Ledger;

/// One asset movement requested from the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Movement {
    /// Pull `amount` of the caller's `token` into custody under the pool's
    /// allowance.
    Pull {
        token: Address,
        owner: Address,
        custody: Address,
        amount: Amount,
    },
    /// Pay `amount` of `token` out of custody.
    Pay {
        token: Address,
        custody: Address,
        to: Address,
        amount: Amount,
    },
}

/// Applies movements in order and remembers what succeeded.
pub(crate) struct Journal<'l, L: Ledger> {
    ledger: &'l mut L,
    done: Vec<Movement>,
}

impl<'l, L: Ledger> Journal<'l, L> {
    pub(crate) fn new(ledger: &'l mut L) -> Self {
        Self {
            ledger,
            done: Vec::with_capacity(2),
        }
    }

    pub(crate) fn apply(&mut self, movement: Movement) -> Result<(), LedgerError> {
        match movement {
            Movement::Pull {
                token,
                owner,
                custody,
                amount,
            } => self
                .ledger
                .transfer_from(token, custody, owner, custody, amount)?,
            Movement::Pay {
                token,
                custody,
                to,
                amount,
            } => self.ledger.transfer(token, custody, to, amount)?,
        }
        self.done.push(movement);
        Ok(())
    }

    /// Reverses every applied movement, newest first.
    ///
    /// A pull is undone by paying the amount back and re-granting the
    /// allowance it consumed.  Reversal failures cannot be surfaced to the
    /// caller, whose operation already failed, so they are logged.
    pub(crate) fn rollback(self) {
        for movement in self.done.into_iter().rev() {
            let undone = match movement {
                Movement::Pull {
                    token,
                    owner,
                    custody,
                    amount,
                } => self
                    .ledger
                    .transfer(token, custody, owner, amount)
                    .and_then(|()| {
                        let left = self.ledger.allowance(token, owner, custody);
                        let restored = Amount::new(left.get().saturating_add(amount.get()));
                        self.ledger.approve(token, owner, custody, restored)
                    }),
                Movement::Pay {
                    token,
                    custody,
                    to,
                    amount,
                } => self.ledger.transfer(token, to, custody, amount),
            };
            if let Err(err) = undone {
                error!(?movement, %err, "failed to reverse ledger movement");
            }
        }
    }
}
