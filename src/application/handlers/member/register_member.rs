//! RegisterMemberHandler - Command handler for enrolling a new member.

use std::sync::Arc;

use crate::domain::foundation::{
    CompanyId, DomainError, MemberId, MembershipId, PaymentId, Timestamp,
};
use crate::domain::member::MemberProfile;
use crate::domain::membership::Membership;
use crate::domain::payment::{Payment, PaymentMethod};
use crate::domain::plan::{PlanCategory, PlanDuration};
use crate::ports::{EnrollmentRepository, PlanCatalog};

/// Command to register a member with their first membership and payment.
#[derive(Debug, Clone)]
pub struct RegisterMemberCommand {
    pub full_name: String,
    pub phone: String,
    pub corporate_id: Option<CompanyId>,
    pub category: PlanCategory,
    pub duration: PlanDuration,
    pub payment_method: PaymentMethod,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterMemberResult {
    pub profile: MemberProfile,
    pub membership: Membership,
    pub payment: Payment,
}

/// Handler for member registration.
pub struct RegisterMemberHandler {
    catalog: Arc<dyn PlanCatalog>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl RegisterMemberHandler {
    pub fn new(catalog: Arc<dyn PlanCatalog>, enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self {
            catalog,
            enrollments,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterMemberCommand,
    ) -> Result<RegisterMemberResult, DomainError> {
        // 1. Price the requested plan
        let plan = self.catalog.price_of(cmd.category, cmd.duration).await?;

        // 2. Build the profile, membership and payment
        let now = Timestamp::now();
        let profile = MemberProfile::new(
            MemberId::new(),
            cmd.full_name,
            cmd.phone,
            cmd.corporate_id,
            now,
        )?;
        let membership = Membership::start(
            MembershipId::new(),
            profile.id,
            plan.id,
            plan.duration,
            now,
        );
        let payment = Payment::new(
            PaymentId::new(),
            profile.id,
            membership.id,
            plan.price,
            cmd.payment_method,
            now,
        )?;

        // 3. Persist all three atomically
        self.enrollments
            .register(&profile, &membership, &payment)
            .await?;

        tracing::info!(
            member_id = %profile.id,
            membership_id = %membership.id,
            expiry = %membership.expiry_date,
            "member registered"
        );

        Ok(RegisterMemberResult {
            profile,
            membership,
            payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{MockEnrollmentRepository, MockPlanCatalog};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::membership::MembershipStatus;

    fn command() -> RegisterMemberCommand {
        RegisterMemberCommand {
            full_name: "Jane Doe".to_string(),
            phone: "0712000000".to_string(),
            corporate_id: None,
            category: PlanCategory::NonTenant,
            duration: PlanDuration::Monthly,
            payment_method: PaymentMethod::Mpesa,
        }
    }

    #[tokio::test]
    async fn registers_member_with_membership_and_payment() {
        let catalog = Arc::new(MockPlanCatalog::with_standard_plans());
        let enrollments = Arc::new(MockEnrollmentRepository::new());
        let handler = RegisterMemberHandler::new(catalog, enrollments.clone());

        let result = handler.handle(command()).await.unwrap();

        assert_eq!(result.membership.member_id, result.profile.id);
        assert_eq!(result.payment.membership_id, result.membership.id);
        assert_eq!(result.membership.status, MembershipStatus::Active);
        assert_eq!(enrollments.registered().len(), 1);
    }

    #[tokio::test]
    async fn payment_amount_comes_from_the_catalog() {
        let catalog = Arc::new(MockPlanCatalog::with_standard_plans());
        let expected = catalog.plan_price(PlanCategory::NonTenant, PlanDuration::Monthly);
        let enrollments = Arc::new(MockEnrollmentRepository::new());
        let handler = RegisterMemberHandler::new(catalog, enrollments);

        let result = handler.handle(command()).await.unwrap();

        assert_eq!(result.payment.amount, expected);
    }

    #[tokio::test]
    async fn fails_when_no_plan_matches() {
        let catalog = Arc::new(MockPlanCatalog::empty());
        let enrollments = Arc::new(MockEnrollmentRepository::new());
        let handler = RegisterMemberHandler::new(catalog, enrollments.clone());

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::PlanNotFound);
        assert!(enrollments.registered().is_empty());
    }

    #[tokio::test]
    async fn fails_on_blank_name_without_persisting() {
        let catalog = Arc::new(MockPlanCatalog::with_standard_plans());
        let enrollments = Arc::new(MockEnrollmentRepository::new());
        let handler = RegisterMemberHandler::new(catalog, enrollments.clone());

        let mut cmd = command();
        cmd.full_name = "  ".to_string();
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(enrollments.registered().is_empty());
    }

    #[tokio::test]
    async fn fails_when_store_rejects_the_write() {
        let catalog = Arc::new(MockPlanCatalog::with_standard_plans());
        let enrollments = Arc::new(MockEnrollmentRepository::failing());
        let handler = RegisterMemberHandler::new(catalog, enrollments);

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StoreUnavailable);
    }
}
