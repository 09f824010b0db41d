//! Decimal places for converting between whole and raw units.

use super::Amount;
use crate::error::SwapError;

/// Maximum supported decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places an asset uses for its smallest unit.
///
/// Valid range is `0..=18`.  The pool itself is unit-agnostic; `Decimals`
/// exists so hosts can convert user-facing whole amounts into raw
/// [`Amount`]s and render raw amounts back for display.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Decimals};
///
/// let raw = Decimals::STANDARD.to_raw(50_000);
/// assert_eq!(raw, Amount::new(50_000_000_000_000_000_000_000));
/// assert_eq!(Decimals::STANDARD.format_raw(Amount::new(500_000_000_000_000_000)), "0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// 18 decimal places, the precision every pooled asset is assumed to use.
    pub const STANDARD: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, SwapError> {
        if value > MAX_DECIMALS {
            return Err(SwapError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts whole units into raw units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub const fn to_raw(&self, whole: u64) -> Amount {
        Amount::new((whole as u128) * self.factor())
    }

    /// Renders raw units as a decimal string.
    ///
    /// Trailing fractional zeros are trimmed but at least one fractional
    /// digit is kept, so `1e18` renders as `"1.0"`.
    #[must_use]
    pub fn format_raw(&self, raw: Amount) -> String {
        let factor = self.factor();
        let whole = raw.get() / factor;
        if self.0 == 0 {
            return format!("{whole}.0");
        }
        let frac = raw.get() % factor;
        let width = usize::from(self.0);
        let digits = format!("{frac:0width$}");
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            format!("{whole}.0")
        } else {
            format!("{whole}.{trimmed}")
        }
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}
