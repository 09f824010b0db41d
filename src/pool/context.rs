//! Per-call host context.

use crate::domain::{Address, Timestamp};
use crate::traits::Clock;

/// Who is calling and when.
///
/// The host supplies this with every mutating operation; the pool has no
/// ambient notion of either.  `caller` is the account whose tokens are
/// pulled on deposits and swaps and whose shares are burned on withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    caller: Address,
    now: Timestamp,
}

impl CallContext {
    /// Creates a context for `caller` at `now`.
    #[must_use]
    pub const fn new(caller: Address, now: Timestamp) -> Self {
        Self { caller, now }
    }

    /// Creates a context for `caller`, reading the time from `clock`.
    #[must_use]
    pub fn at(caller: Address, clock: &impl Clock) -> Self {
        Self::new(caller, clock.now())
    }

    /// The invoking account.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    /// Host time of the call.
    #[must_use]
    pub const fn now(&self) -> Timestamp {
        self.now
    }
}
