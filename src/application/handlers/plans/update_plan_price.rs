//! UpdatePlanPriceHandler - Command handler for repricing a plan.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Money, PlanId};
use crate::domain::plan::Plan;
use crate::ports::PlanCatalog;

/// Command to reprice a plan. Existing memberships keep what they paid;
/// the new price applies to enrollments from now on.
#[derive(Debug, Clone)]
pub struct UpdatePlanPriceCommand {
    pub plan_id: PlanId,
    pub price: Money,
}

pub struct UpdatePlanPriceHandler {
    catalog: Arc<dyn PlanCatalog>,
}

impl UpdatePlanPriceHandler {
    pub fn new(catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: UpdatePlanPriceCommand) -> Result<Plan, DomainError> {
        if cmd.price.as_minor() <= 0 {
            return Err(DomainError::validation("price", "must be positive"));
        }
        let plan = self.catalog.update_price(cmd.plan_id, cmd.price).await?;

        tracing::info!(plan_id = %plan.id, price = %plan.price, "plan repriced");
        Ok(plan)
    }
}
