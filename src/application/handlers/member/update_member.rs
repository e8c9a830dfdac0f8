//! UpdateMemberHandler - Command handler for editing member contact details.

use std::sync::Arc;

use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, MemberId};
use crate::domain::member::MemberProfile;
use crate::ports::MemberRepository;

#[derive(Debug, Clone)]
pub struct UpdateMemberCommand {
    pub member_id: MemberId,
    pub full_name: String,
    pub phone: String,
    pub corporate_id: Option<CompanyId>,
}

pub struct UpdateMemberHandler {
    members: Arc<dyn MemberRepository>,
}

impl UpdateMemberHandler {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, cmd: UpdateMemberCommand) -> Result<MemberProfile, DomainError> {
        let mut profile = self
            .members
            .find_by_id(cmd.member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MemberNotFound,
                    format!("Member {} not found", cmd.member_id),
                )
            })?;

        profile.update_contact(cmd.full_name, cmd.phone, cmd.corporate_id)?;
        self.members.update(&profile).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockMemberRepository;
    use crate::domain::foundation::Timestamp;

    fn profile() -> MemberProfile {
        MemberProfile::new(
            MemberId::new(),
            "Jane Doe",
            "0712000000",
            None,
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn updates_contact_fields() {
        let existing = profile();
        let members = Arc::new(MockMemberRepository::with_member(existing.clone()));
        let handler = UpdateMemberHandler::new(members.clone());

        let updated = handler
            .handle(UpdateMemberCommand {
                member_id: existing.id,
                full_name: "Jane A. Doe".to_string(),
                phone: "0712999999".to_string(),
                corporate_id: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.full_name, "Jane A. Doe");
        assert_eq!(members.updated().len(), 1);
    }

    #[tokio::test]
    async fn fails_for_unknown_member() {
        let members = Arc::new(MockMemberRepository::empty());
        let handler = UpdateMemberHandler::new(members);

        let err = handler
            .handle(UpdateMemberCommand {
                member_id: MemberId::new(),
                full_name: "Jane Doe".to_string(),
                phone: "0712000000".to_string(),
                corporate_id: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MemberNotFound);
    }
}
