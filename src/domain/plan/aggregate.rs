//! Plan entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PlanId};

use super::{PlanCategory, PlanDuration};

/// A priced membership offering, unique per (category, duration).
///
/// Plans are edited (price changes) but never deleted in normal flow,
/// since memberships and payments keep referring to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub category: PlanCategory,
    pub duration: PlanDuration,
    pub price: Money,
    /// Minimum member headcount; set for corporate plans only.
    pub corporate_minimum: Option<u32>,
}

impl Plan {
    pub fn new(
        id: PlanId,
        category: PlanCategory,
        duration: PlanDuration,
        price: Money,
        corporate_minimum: Option<u32>,
    ) -> Self {
        Self {
            id,
            category,
            duration,
            price,
            corporate_minimum,
        }
    }

    /// Returns a copy with an updated price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_price_replaces_only_the_price() {
        let plan = Plan::new(
            PlanId::new(),
            PlanCategory::Corporate,
            PlanDuration::Annual,
            Money::from_major(40_000),
            Some(5),
        );
        let updated = plan.clone().with_price(Money::from_major(45_000));
        assert_eq!(updated.price, Money::from_major(45_000));
        assert_eq!(updated.id, plan.id);
        assert_eq!(updated.corporate_minimum, Some(5));
    }
}
