//! PostgreSQL implementation of MemberRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, MemberId, Timestamp};
use crate::domain::member::{MemberProfile, MemberRole};
use crate::ports::MemberRepository;

pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    full_name: String,
    phone: String,
    corporate_id: Option<Uuid>,
    role: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for MemberProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = row.role.as_deref().map(parse_role).transpose()?;
        Ok(MemberProfile {
            id: MemberId::from_uuid(row.id),
            full_name: row.full_name,
            phone: row.phone,
            corporate_id: row.corporate_id.map(CompanyId::from_uuid),
            role,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_role(s: &str) -> Result<MemberRole, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::StoreUnavailable,
            format!("Invalid role value: {}", s),
        )
    })
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<MemberProfile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, full_name, phone, corporate_id, role, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find member: {}", e)))?;

        row.map(MemberProfile::try_from).transpose()
    }

    async fn update(&self, profile: &MemberProfile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET
                full_name = $2,
                phone = $3,
                corporate_id = $4
            WHERE id = $1
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(&profile.full_name)
        .bind(&profile.phone)
        .bind(profile.corporate_id.map(|c| *c.as_uuid()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Member {} not found", profile.id),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: MemberId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin transaction: {}", e)))?;

        // Payment history blocks deletion; checked inside the transaction
        // so a concurrent payment cannot slip past the guard.
        let (payment_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM payments WHERE member_id = $1")
                .bind(id.as_uuid())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::store(format!("Failed to count payments: {}", e)))?;
        if payment_count > 0 {
            return Err(DomainError::has_payment_history(id));
        }

        sqlx::query("DELETE FROM attendance WHERE member_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete attendance: {}", e)))?;

        sqlx::query("DELETE FROM memberships WHERE member_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete memberships: {}", e)))?;

        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete member: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("Member {} not found", id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit deletion: {}", e)))?;

        Ok(())
    }
}
