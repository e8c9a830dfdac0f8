//! CreateCompanyHandler - Command handler for onboarding a sponsor company.

use std::sync::Arc;

use crate::domain::corporate::Company;
use crate::domain::foundation::{CompanyId, DomainError, Money, Timestamp};
use crate::ports::CorporateRepository;

/// Command to onboard a corporate sponsor. When no rate is given the
/// company gets the standard per-member rate.
#[derive(Debug, Clone)]
pub struct CreateCompanyCommand {
    pub company_name: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub rate_per_member: Option<Money>,
}

pub struct CreateCompanyHandler {
    corporates: Arc<dyn CorporateRepository>,
}

impl CreateCompanyHandler {
    pub fn new(corporates: Arc<dyn CorporateRepository>) -> Self {
        Self { corporates }
    }

    pub async fn handle(&self, cmd: CreateCompanyCommand) -> Result<Company, DomainError> {
        let company = Company::new(
            CompanyId::new(),
            cmd.company_name,
            cmd.contact_person,
            cmd.contact_phone,
            cmd.rate_per_member,
            Timestamp::now(),
        )?;
        self.corporates.create(&company).await?;

        tracing::info!(company_id = %company.id, name = %company.company_name, "company created");
        Ok(company)
    }
}
