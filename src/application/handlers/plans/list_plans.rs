//! ListPlansHandler - Query handler for the plan price list.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::plan::Plan;
use crate::ports::PlanCatalog;

pub struct ListPlansHandler {
    catalog: Arc<dyn PlanCatalog>,
}

impl ListPlansHandler {
    pub fn new(catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Plan>, DomainError> {
        self.catalog.list().await
    }
}
