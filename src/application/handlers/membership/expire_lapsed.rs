//! ExpireLapsedHandler - Sweep that expires memberships past their date.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::MembershipRepository;

#[derive(Debug, Clone, Copy)]
pub struct ExpireLapsedResult {
    pub expired_count: u64,
}

/// Flips every active membership whose expiry has passed to expired.
/// Run periodically; reads already treat lapsed rows as expired, so the
/// sweep only reconciles stored status.
pub struct ExpireLapsedHandler {
    memberships: Arc<dyn MembershipRepository>,
}

impl ExpireLapsedHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { memberships }
    }

    pub async fn handle(&self) -> Result<ExpireLapsedResult, DomainError> {
        let expired_count = self.memberships.expire_lapsed(Timestamp::now()).await?;
        if expired_count > 0 {
            tracing::info!(expired_count, "lapsed memberships expired");
        }
        Ok(ExpireLapsedResult { expired_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockMembershipRepository;
    use crate::domain::foundation::{MemberId, MembershipId, PlanId};
    use crate::domain::membership::Membership;
    use crate::domain::plan::PlanDuration;

    #[tokio::test]
    async fn reports_number_of_rows_swept() {
        let mut lapsed = Membership::start(
            MembershipId::new(),
            MemberId::new(),
            PlanId::new(),
            PlanDuration::Monthly,
            Timestamp::now().add_days(-60),
        );
        lapsed.expiry_date = Timestamp::now().add_days(-30);

        let memberships = Arc::new(MockMembershipRepository::with_membership(lapsed));
        let handler = ExpireLapsedHandler::new(memberships);

        let result = handler.handle().await.unwrap();
        assert_eq!(result.expired_count, 1);
    }

    #[tokio::test]
    async fn sweeping_an_empty_store_expires_nothing() {
        let memberships = Arc::new(MockMembershipRepository::empty());
        let handler = ExpireLapsedHandler::new(memberships);

        let result = handler.handle().await.unwrap();
        assert_eq!(result.expired_count, 0);
    }
}
