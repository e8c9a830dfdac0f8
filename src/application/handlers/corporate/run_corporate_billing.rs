//! RunCorporateBillingHandler - Command handler for monthly corporate billing.

use std::sync::Arc;

use crate::domain::corporate::CorporatePayment;
use crate::domain::foundation::{
    BillingMonth, CompanyId, CorporatePaymentId, DomainError, ErrorCode, Money, Timestamp,
};
use crate::ports::CorporateRepository;

/// Command to bill a company for one month. When no month is given the
/// run covers the month containing the current instant.
#[derive(Debug, Clone)]
pub struct RunCorporateBillingCommand {
    pub company_id: CompanyId,
    pub billing_month: Option<BillingMonth>,
}

#[derive(Debug, Clone)]
pub struct RunCorporateBillingResult {
    pub payment_id: CorporatePaymentId,
    pub amount: Money,
    pub members_count: u64,
    pub billing_month: BillingMonth,
    pub memberships_reset: u64,
}

/// Handler for corporate billing runs.
///
/// Prices the invoice as active member count times the company's rate,
/// then records the invoice and resets the sponsored memberships to the
/// billing month in one atomic write.
pub struct RunCorporateBillingHandler {
    corporates: Arc<dyn CorporateRepository>,
}

impl RunCorporateBillingHandler {
    pub fn new(corporates: Arc<dyn CorporateRepository>) -> Self {
        Self { corporates }
    }

    pub async fn handle(
        &self,
        cmd: RunCorporateBillingCommand,
    ) -> Result<RunCorporateBillingResult, DomainError> {
        // 1. The company must exist and still be billable
        let company = self
            .corporates
            .find_by_id(cmd.company_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CompanyNotFound,
                    format!("Company {} not found", cmd.company_id),
                )
            })?;
        if !company.is_active {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Company {} is deactivated", company.company_name),
            ));
        }

        // 2. Price the run from the live member count
        let now = Timestamp::now();
        let billing_month = cmd.billing_month.unwrap_or_else(|| BillingMonth::containing(now));
        let members_count = self.corporates.active_member_count(company.id).await?;
        let payment = CorporatePayment::for_billing_run(
            CorporatePaymentId::new(),
            &company,
            members_count,
            billing_month,
            now,
        )?;

        // 3. Record the invoice and reset memberships atomically
        let memberships_reset = self.corporates.record_billing_run(&payment, now).await?;

        tracing::info!(
            company_id = %company.id,
            month = %billing_month,
            amount = %payment.amount,
            members_count,
            memberships_reset,
            "corporate billing run recorded"
        );

        Ok(RunCorporateBillingResult {
            payment_id: payment.id,
            amount: payment.amount,
            members_count,
            billing_month,
            memberships_reset,
        })
    }
}
