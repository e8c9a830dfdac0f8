//! Monetary amounts in integer minor units.
//!
//! All money is stored as i64 cents (never floats), following the same
//! convention as the payments table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount of money in minor units (cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units (cents).
    pub const fn from_minor(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from major units (whole shillings).
    pub fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Returns the amount in minor units.
    pub fn as_minor(&self) -> i64 {
        self.0
    }

    /// Multiplies the amount by a member count.
    pub fn times(&self, count: u64) -> Self {
        Self(self.0 * count as i64)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KES {}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_scales_to_cents() {
        assert_eq!(Money::from_major(2000).as_minor(), 200_000);
    }

    #[test]
    fn times_multiplies_by_member_count() {
        let rate = Money::from_major(5000);
        assert_eq!(rate.times(3), Money::from_major(15_000));
    }

    #[test]
    fn sums_over_iterator() {
        let total: Money = [Money::from_major(100), Money::from_major(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(350));
    }

    #[test]
    fn displays_as_shillings() {
        assert_eq!(Money::from_minor(200_050).to_string(), "KES 2000.50");
    }
}
