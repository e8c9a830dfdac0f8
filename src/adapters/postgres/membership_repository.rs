//! PostgreSQL implementation of MembershipRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, MembershipId, PlanId, Timestamp};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::MembershipRepository;

pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct MembershipRow {
    id: Uuid,
    member_id: Uuid,
    plan_id: Uuid,
    start_date: DateTime<Utc>,
    expiry_date: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        Ok(Membership {
            id: MembershipId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            plan_id: PlanId::from_uuid(row.plan_id),
            start_date: Timestamp::from_datetime(row.start_date),
            expiry_date: Timestamp::from_datetime(row.expiry_date),
            status: parse_status(&row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

pub(super) fn parse_status(s: &str) -> Result<MembershipStatus, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::StoreUnavailable,
            format!("Invalid membership status value: {}", s),
        )
    })
}

pub(super) const MEMBERSHIP_COLUMNS: &str =
    "id, member_id, plan_id, start_date, expiry_date, status, created_at, updated_at";

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn find_by_id(&self, id: MembershipId) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(&format!(
            "SELECT {} FROM memberships WHERE id = $1",
            MEMBERSHIP_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find membership: {}", e)))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_active_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(&format!(
            "SELECT {} FROM memberships WHERE member_id = $1 AND status = 'active'",
            MEMBERSHIP_COLUMNS
        ))
        .bind(member_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find active membership: {}", e)))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_latest_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Option<Membership>, DomainError> {
        let row: Option<MembershipRow> = sqlx::query_as(&format!(
            "SELECT {} FROM memberships WHERE member_id = $1 ORDER BY created_at DESC LIMIT 1",
            MEMBERSHIP_COLUMNS
        ))
        .bind(member_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find membership: {}", e)))?;

        row.map(Membership::try_from).transpose()
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE memberships SET
                plan_id = $2,
                start_date = $3,
                expiry_date = $4,
                status = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.plan_id.as_uuid())
        .bind(membership.start_date.as_datetime())
        .bind(membership.expiry_date.as_datetime())
        .bind(membership.status.as_str())
        .bind(membership.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update membership: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                format!("Membership {} not found", membership.id),
            ));
        }

        Ok(())
    }

    async fn expire_lapsed(&self, now: Timestamp) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE memberships SET status = 'expired', updated_at = $1
            WHERE status = 'active' AND expiry_date <= $1
            "#,
        )
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to expire memberships: {}", e)))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_accepts_stored_values() {
        assert_eq!(parse_status("active").unwrap(), MembershipStatus::Active);
        assert_eq!(parse_status("expired").unwrap(), MembershipStatus::Expired);
        assert!(parse_status("frozen").is_err());
    }
}
