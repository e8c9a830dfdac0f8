//! Member profile port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::MemberProfile;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<MemberProfile>, DomainError>;

    async fn update(&self, profile: &MemberProfile) -> Result<(), DomainError>;

    /// Hard-deletes a member, their memberships and attendance.
    ///
    /// The implementation checks for payment history inside the same
    /// transaction and fails with `HAS_PAYMENT_HISTORY` if any payment
    /// references the member, leaving every row untouched.
    async fn delete(&self, id: MemberId) -> Result<(), DomainError>;
}
