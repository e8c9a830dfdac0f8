//! UpdateCompanyHandler - Command handler for editing sponsor details.

use std::sync::Arc;

use crate::domain::corporate::Company;
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, Money};
use crate::ports::CorporateRepository;

/// Command to edit a sponsor's contact details and per-member rate.
/// Rate changes apply from the next billing run; past invoices keep
/// the rate they were priced at.
#[derive(Debug, Clone)]
pub struct UpdateCompanyCommand {
    pub company_id: CompanyId,
    pub company_name: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub rate_per_member: Money,
}

pub struct UpdateCompanyHandler {
    corporates: Arc<dyn CorporateRepository>,
}

impl UpdateCompanyHandler {
    pub fn new(corporates: Arc<dyn CorporateRepository>) -> Self {
        Self { corporates }
    }

    pub async fn handle(&self, cmd: UpdateCompanyCommand) -> Result<Company, DomainError> {
        let mut company = self
            .corporates
            .find_by_id(cmd.company_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CompanyNotFound,
                    format!("Company {} not found", cmd.company_id),
                )
            })?;

        company.update_details(
            cmd.company_name,
            cmd.contact_person,
            cmd.contact_phone,
            cmd.rate_per_member,
        )?;
        self.corporates.update(&company).await?;

        Ok(company)
    }
}
