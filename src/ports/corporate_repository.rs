//! Corporate sponsor port.

use async_trait::async_trait;

use crate::domain::corporate::{Company, CorporatePayment};
use crate::domain::foundation::{CompanyId, DomainError, Timestamp};

#[async_trait]
pub trait CorporateRepository: Send + Sync {
    async fn create(&self, company: &Company) -> Result<(), DomainError>;

    async fn update(&self, company: &Company) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError>;

    async fn list(&self) -> Result<Vec<Company>, DomainError>;

    /// Number of members sponsored by the company who currently hold an
    /// active membership.
    async fn active_member_count(&self, id: CompanyId) -> Result<u64, DomainError>;

    /// Persists a billing run atomically: inserts the corporate payment
    /// and resets every sponsored active membership to cover the billing
    /// month. Returns the number of memberships reset.
    async fn record_billing_run(
        &self,
        payment: &CorporatePayment,
        now: Timestamp,
    ) -> Result<u64, DomainError>;
}
