//! Fixed-point monetary amounts.
//!
//! All prices in innkeep are integer minor units (e.g. cents, or whole
//! rupiah for zero-decimal currencies). Floating point is never used for
//! money: totals must round-trip exactly through persistence and
//! redisplay.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A monetary amount in integer minor units.
///
/// `Money` is a thin wrapper over `i64`. Amounts can be negative while a
/// price is being adjusted (discount deltas), but nightly prices are
/// floored at zero before they enter a total.
///
/// # Examples
///
/// ```
/// use innkeep::Money;
///
/// let base = Money::new(100_000);
/// let delta = base.percent_delta(15);
/// assert_eq!((base + delta).minor_units(), 115_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from integer minor units.
    #[must_use]
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Returns the amount in integer minor units.
    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Computes a percentage of this amount as a signed delta.
    ///
    /// Integer division truncates toward zero, so `Money::new(999)
    /// .percent_delta(10)` is `99`, not `100`. All percentage adjustments
    /// in the engine go through this method, keeping rounding uniform.
    /// The intermediate product saturates rather than overflowing, so an
    /// absurd catalog value cannot panic; the stay total's checked sum
    /// still rejects amounts that large.
    #[must_use]
    pub const fn percent_delta(self, percent: i64) -> Self {
        Self(self.0.saturating_mul(percent) / 100)
    }

    /// Clamps a negative amount to zero.
    ///
    /// Nightly prices never go negative even when discounts exceed the
    /// base price.
    #[must_use]
    pub const fn floor_zero(self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            self
        }
    }

    /// Checked addition, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Saturating addition, clamping at the `i64` bounds.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_basics() {
        let m = Money::new(850_000);
        assert_eq!(m.minor_units(), 850_000);
        assert_eq!(format!("{m}"), "850000");
        assert_eq!(Money::ZERO.minor_units(), 0);
    }

    #[test]
    fn test_percent_delta() {
        let base = Money::new(100_000);
        assert_eq!(base.percent_delta(15).minor_units(), 15_000);
        assert_eq!(base.percent_delta(-10).minor_units(), -10_000);
        assert_eq!(base.percent_delta(0).minor_units(), 0);
    }

    #[test]
    fn test_percent_delta_truncates_toward_zero() {
        assert_eq!(Money::new(999).percent_delta(10).minor_units(), 99);
        assert_eq!(Money::new(999).percent_delta(-10).minor_units(), -99);
    }

    #[test]
    fn test_floor_zero() {
        assert_eq!(Money::new(-5_000).floor_zero(), Money::ZERO);
        assert_eq!(Money::new(5_000).floor_zero(), Money::new(5_000));
        assert_eq!(Money::ZERO.floor_zero(), Money::ZERO);
    }

    #[test]
    fn test_addition() {
        let total = Money::new(850_000) + Money::new(850_000) + Money::new(850_000);
        assert_eq!(total.minor_units(), 2_550_000);
    }

    #[test]
    fn test_percent_delta_saturates_instead_of_overflowing() {
        let huge = Money::new(i64::MAX);
        assert_eq!(huge.percent_delta(200).minor_units(), i64::MAX / 100);
        let negative = Money::new(i64::MIN);
        assert_eq!(negative.percent_delta(200).minor_units(), i64::MIN / 100);
    }

    #[test]
    fn test_saturating_add_clamps() {
        assert_eq!(
            Money::new(i64::MAX).saturating_add(Money::new(1)),
            Money::new(i64::MAX)
        );
        assert_eq!(
            Money::new(1).saturating_add(Money::new(2)),
            Money::new(3)
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(Money::new(i64::MAX).checked_add(Money::new(1)).is_none());
        assert_eq!(
            Money::new(1).checked_add(Money::new(2)),
            Some(Money::new(3))
        );
    }

    #[test]
    fn test_money_serde_roundtrip() {
        let m = Money::new(2_550_000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "2550000");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
