//! Sources of the current time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// Supplies the host's notion of "now" for deadline checks.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // a clock set before 1970 reads as the epoch
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to.
///
/// ```
/// use simple_swap::domain::Timestamp;
/// use simple_swap::traits::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::from_secs(1_000));
/// clock.advance(30);
/// assert_eq!(clock.now(), Timestamp::from_secs(1_030));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock(AtomicU64);

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self(AtomicU64::new(start.as_secs()))
    }

    /// Jumps to `at`.
    pub fn set(&self, at: Timestamp) {
        self.0.store(at.as_secs(), Ordering::SeqCst);
    }

    /// Moves forward by `secs`, saturating.
    pub fn advance(&self, secs: u64) {
        let now = self.now().plus_secs(secs);
        self.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.0.load(Ordering::SeqCst))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
