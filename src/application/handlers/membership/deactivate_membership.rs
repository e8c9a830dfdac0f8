//! DeactivateMembershipHandler - Command handler for manual deactivation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MembershipId, Timestamp};
use crate::domain::membership::Membership;
use crate::ports::MembershipRepository;

/// Command to expire a membership ahead of its natural expiry, e.g.
/// when a member leaves or a corporate contract ends.
#[derive(Debug, Clone)]
pub struct DeactivateMembershipCommand {
    pub membership_id: MembershipId,
}

pub struct DeactivateMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
}

impl DeactivateMembershipHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { memberships }
    }

    pub async fn handle(
        &self,
        cmd: DeactivateMembershipCommand,
    ) -> Result<Membership, DomainError> {
        let mut membership = self
            .memberships
            .find_by_id(cmd.membership_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MembershipNotFound,
                    format!("Membership {} not found", cmd.membership_id),
                )
            })?;

        membership.deactivate(Timestamp::now());
        self.memberships.update(&membership).await?;

        tracing::info!(membership_id = %cmd.membership_id, "membership deactivated");
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockMembershipRepository;
    use crate::domain::foundation::{MemberId, PlanId};
    use crate::domain::membership::MembershipStatus;
    use crate::domain::plan::PlanDuration;

    #[tokio::test]
    async fn deactivates_the_membership() {
        let membership = Membership::start(
            MembershipId::new(),
            MemberId::new(),
            PlanId::new(),
            PlanDuration::Monthly,
            Timestamp::now(),
        );
        let membership_id = membership.id;
        let memberships = Arc::new(MockMembershipRepository::with_membership(membership));
        let handler = DeactivateMembershipHandler::new(memberships.clone());

        let result = handler
            .handle(DeactivateMembershipCommand { membership_id })
            .await
            .unwrap();

        assert_eq!(result.status, MembershipStatus::Expired);
        assert_eq!(memberships.updated().len(), 1);
    }

    #[tokio::test]
    async fn fails_for_unknown_membership() {
        let memberships = Arc::new(MockMembershipRepository::empty());
        let handler = DeactivateMembershipHandler::new(memberships);

        let err = handler
            .handle(DeactivateMembershipCommand {
                membership_id: MembershipId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MembershipNotFound);
    }
}
