//! RecordPaymentHandler - Command handler for renewal payments.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Money, PaymentId, Timestamp};
use crate::domain::membership::Membership;
use crate::domain::payment::{Payment, PaymentMethod};
use crate::ports::{EnrollmentRepository, MembershipRepository, PlanCatalog};

/// Command to record a renewal payment for an existing member.
///
/// The amount is whatever was collected at the desk; partial and
/// discounted payments are accepted, and the renewal period always comes
/// from the membership's own plan.
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub member_id: MemberId,
    pub amount: Money,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone)]
pub struct RecordPaymentResult {
    pub membership: Membership,
    pub payment: Payment,
}

/// Handler for renewal payments.
///
/// Extends the member's existing membership in place: a still-active
/// membership stacks the new period on its current expiry, a lapsed one
/// restarts from now.
pub struct RecordPaymentHandler {
    catalog: Arc<dyn PlanCatalog>,
    memberships: Arc<dyn MembershipRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl RecordPaymentHandler {
    pub fn new(
        catalog: Arc<dyn PlanCatalog>,
        memberships: Arc<dyn MembershipRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            catalog,
            memberships,
            enrollments,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordPaymentCommand,
    ) -> Result<RecordPaymentResult, DomainError> {
        // 1. Load the membership being renewed
        let mut membership = self
            .memberships
            .find_latest_for_member(cmd.member_id)
            .await?
            .ok_or_else(|| DomainError::no_active_membership(cmd.member_id))?;

        // 2. The renewal period comes from the membership's own plan
        let plan = self
            .catalog
            .find_by_id(membership.plan_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PlanNotFound,
                    format!("Plan {} not found", membership.plan_id),
                )
            })?;

        // 3. Extend it and record the payment atomically
        let now = Timestamp::now();
        membership.extend(plan.id, plan.duration, now);
        let payment = Payment::new(
            PaymentId::new(),
            cmd.member_id,
            membership.id,
            cmd.amount,
            cmd.payment_method,
            now,
        )?;
        self.enrollments.renew(&membership, &payment).await?;

        tracing::info!(
            member_id = %cmd.member_id,
            membership_id = %membership.id,
            amount = %payment.amount,
            new_expiry = %membership.expiry_date,
            "renewal payment recorded"
        );

        Ok(RecordPaymentResult {
            membership,
            payment,
        })
    }
}
