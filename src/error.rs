//! Unified error types for the swap engine.
//!
//! Every fallible operation returns [`SwapError`].  Failures raised by the
//! [`Ledger`](crate::traits::Ledger) collaborator are wrapped unchanged in
//! [`SwapError::Ledger`].

use crate::domain::{Address, Amount, Liquidity, Timestamp};

/// Errors raised by a [`Ledger`](crate::traits::Ledger) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The owner does not hold enough of `token` to cover the transfer.
    #[error("insufficient balance of {token}: account {owner} holds {available}, needs {requested}")]
    InsufficientBalance {
        /// Asset being moved.
        token: Address,
        /// Account being debited.
        owner: Address,
        /// Balance at the time of the call.
        available: Amount,
        /// Amount the caller tried to move.
        requested: Amount,
    },

    /// The spender has not been approved for enough of the owner's `token`.
    #[error("insufficient allowance of {token}: {spender} may move {available} from {owner}, needs {requested}")]
    InsufficientAllowance {
        /// Asset being moved.
        token: Address,
        /// Account whose funds are being moved.
        owner: Address,
        /// Account moving the funds.
        spender: Address,
        /// Remaining approval.
        available: Amount,
        /// Amount the spender tried to move.
        requested: Amount,
    },
}

/// Unified error type for all pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    /// A token identity is null or does not belong to the pool.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A swap path or price query does not name the pool's pair.
    #[error("invalid token pair: {0}")]
    InvalidPair(&'static str),

    /// The operation arrived after its deadline.
    #[error("expired: deadline {deadline} is before current time {now}")]
    Expired {
        /// Caller-supplied expiry.
        deadline: Timestamp,
        /// Host time at which the operation ran.
        now: Timestamp,
    },

    /// The calling account may not invoke this operation.
    #[error("invalid caller: {0}")]
    InvalidCaller(&'static str),

    /// A computed amount fell below the caller's minimum.
    #[error("slippage exceeded: computed {amount}, minimum {minimum}")]
    SlippageExceeded {
        /// Amount the pool would have delivered or accepted.
        amount: Amount,
        /// Caller-supplied bound.
        minimum: Amount,
    },

    /// A burn asked for more shares than the caller or the pool holds.
    #[error("not enough liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity {
        /// Shares the caller asked to burn.
        requested: Liquidity,
        /// Shares available to burn.
        available: Liquidity,
    },

    /// A non-positive amount, a zero reserve, or an amount that rounds to zero.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Arithmetic overflow in an intermediate computation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow in an intermediate computation.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A staged state failed the pool invariants and was discarded.
    #[error("pool invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// The pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A ledger transfer failed; the pool state was rolled back.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;
