//! DeactivateCompanyHandler - Command handler for retiring a sponsor.

use std::sync::Arc;

use crate::domain::corporate::Company;
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode};
use crate::ports::CorporateRepository;

/// Command to retire a sponsor. The company row stays so historical
/// billing runs keep their reference; it simply stops being billable.
#[derive(Debug, Clone)]
pub struct DeactivateCompanyCommand {
    pub company_id: CompanyId,
}

pub struct DeactivateCompanyHandler {
    corporates: Arc<dyn CorporateRepository>,
}

impl DeactivateCompanyHandler {
    pub fn new(corporates: Arc<dyn CorporateRepository>) -> Self {
        Self { corporates }
    }

    pub async fn handle(&self, cmd: DeactivateCompanyCommand) -> Result<Company, DomainError> {
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

        company.deactivate();
        self.corporates.update(&company).await?;

        tracing::info!(company_id = %company.id, "company deactivated");
        Ok(company)
    }
}
