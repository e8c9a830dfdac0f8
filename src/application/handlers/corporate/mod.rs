mod create_company;
mod deactivate_company;
mod run_corporate_billing;
mod update_company;

pub use create_company::{CreateCompanyCommand, CreateCompanyHandler};
pub use deactivate_company::{DeactivateCompanyCommand, DeactivateCompanyHandler};
pub use run_corporate_billing::{
    RunCorporateBillingCommand, RunCorporateBillingHandler, RunCorporateBillingResult,
};
pub use update_company::{UpdateCompanyCommand, UpdateCompanyHandler};
