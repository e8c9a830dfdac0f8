//! Enrollment port.
//!
//! Registration and renewal each touch several tables; exposing them as
//! single port methods lets the postgres adapter wrap each in one
//! transaction while handlers stay storage-agnostic.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::member::MemberProfile;
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Persists a new member with their first membership and payment
    /// atomically. No partial state survives a failure.
    async fn register(
        &self,
        profile: &MemberProfile,
        membership: &Membership,
        payment: &Payment,
    ) -> Result<(), DomainError>;

    /// Persists a renewal: the updated membership row plus the payment
    /// that funded it, atomically.
    async fn renew(&self, membership: &Membership, payment: &Payment) -> Result<(), DomainError>;
}
