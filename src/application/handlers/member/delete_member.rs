//! DeleteMemberHandler - Command handler for removing a member.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::ports::MemberRepository;

/// Command to hard-delete a member. Blocked when the member has any
/// payment history; such members are deactivated instead.
#[derive(Debug, Clone)]
pub struct DeleteMemberCommand {
    pub member_id: MemberId,
}

pub struct DeleteMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl DeleteMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: DeleteMemberCommand) -> Result<(), DomainError> {
        if self.members.find_by_id(cmd.member_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Member {} not found", cmd.member_id),
            ));
        }

        // The repository re-checks payment history inside its transaction.
        self.members.delete(cmd.member_id).await?;

        tracing::info!(member_id = %cmd.member_id, "member deleted");
        Ok(())
    }
}
