//! Membership port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MemberId, MembershipId, Timestamp};
use crate::domain::membership::Membership;

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn find_by_id(&self, id: MembershipId) -> Result<Option<Membership>, DomainError>;

    /// The member's single active membership, if any. The store enforces
    /// at most one per member.
    async fn find_active_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Option<Membership>, DomainError>;

    /// The member's most recent membership regardless of status, so a
    /// lapsed membership can be renewed in place.
    async fn find_latest_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Option<Membership>, DomainError>;

    async fn update(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Flips every active membership whose expiry has passed to expired.
    /// Returns the number of rows swept.
    async fn expire_lapsed(&self, now: Timestamp) -> Result<u64, DomainError>;
}
