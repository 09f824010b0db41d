//! Collaborator seams.
//!
//! The pool is generic over a [`Ledger`] that holds the actual token
//! balances, and reads time through whatever the host passes in, typically a
//! [`Clock`].

mod clock;
mod ledger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ledger::{Ledger, MemoryLedger};
