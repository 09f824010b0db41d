//! Host time and operation deadlines.

use core::fmt;

use crate::error::SwapError;

/// Seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns whole seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `self + secs`, saturating at `u64::MAX`.
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

/// Latest time at which an operation may still execute.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Deadline, Timestamp};
///
/// let deadline = Deadline::new(Timestamp::from_secs(100));
/// assert!(deadline.check(Timestamp::from_secs(100)).is_ok());
/// assert!(deadline.check(Timestamp::from_secs(101)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deadline(Timestamp);

impl Deadline {
    /// A deadline that never passes.
    pub const NEVER: Self = Self(Timestamp(u64::MAX));

    /// Creates a deadline at `at`.
    #[must_use]
    pub const fn new(at: Timestamp) -> Self {
        Self(at)
    }

    /// A deadline `secs` after `now`.
    #[must_use]
    pub const fn after(now: Timestamp, secs: u64) -> Self {
        Self(now.plus_secs(secs))
    }

    /// Returns the expiry instant.
    #[must_use]
    pub const fn at(&self) -> Timestamp {
        self.0
    }

    /// Fails once `now` is strictly past the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Expired`] if `now > deadline`.
    pub fn check(&self, now: Timestamp) -> Result<(), SwapError> {
        if now > self.0 {
            return Err(SwapError::Expired {
                deadline: self.0,
                now,
            });
        }
        Ok(())
    }
}

impl From<Timestamp> for Deadline {
    fn from(at: Timestamp) -> Self {
        Self(at)
    }
}
