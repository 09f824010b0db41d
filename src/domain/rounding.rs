//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the engine.
///
/// Amounts paid out of the pool round [`Down`](Rounding::Down); fees and
/// amounts owed to the pool round [`Up`](Rounding::Up).  Rounding never
/// favours the caller.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
