//! Plan catalog port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Money, PlanId};
use crate::domain::plan::{Plan, PlanCategory, PlanDuration};

/// Lookup and maintenance of the plan price list.
#[async_trait]
pub trait PlanCatalog: Send + Sync {
    /// Resolves the plan for a category/duration pair.
    ///
    /// Fails with `PLAN_NOT_FOUND` when the catalog carries no such
    /// combination.
    async fn price_of(
        &self,
        category: PlanCategory,
        duration: PlanDuration,
    ) -> Result<Plan, DomainError>;

    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, DomainError>;

    async fn list(&self) -> Result<Vec<Plan>, DomainError>;

    /// Repoints the price of an existing plan. Existing memberships are
    /// unaffected; the new price applies to future enrollments.
    async fn update_price(&self, id: PlanId, price: Money) -> Result<Plan, DomainError>;
}
