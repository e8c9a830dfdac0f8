//! PostgreSQL implementation of EnrollmentRepository.
//!
//! Each method runs inside one transaction so a failed write leaves no
//! partial profile, membership or payment behind.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::foundation::DomainError;
use crate::domain::member::MemberProfile;
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;
use crate::ports::EnrollmentRepository;

pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_payment(
    tx: &mut Transaction<'_, Postgres>,
    payment: &Payment,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO payments (id, member_id, membership_id, amount_cents, method, paid_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(payment.id.as_uuid())
    .bind(payment.member_id.as_uuid())
    .bind(payment.membership_id.as_uuid())
    .bind(payment.amount.as_minor())
    .bind(payment.method.as_str())
    .bind(payment.paid_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::store(format!("Failed to insert payment: {}", e)))?;

    Ok(())
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn register(
        &self,
        profile: &MemberProfile,
        membership: &Membership,
        payment: &Payment,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO profiles (id, full_name, phone, corporate_id, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(&profile.full_name)
        .bind(&profile.phone)
        .bind(profile.corporate_id.map(|c| *c.as_uuid()))
        .bind(profile.role.map(|r| r.as_str()))
        .bind(profile.created_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert profile: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO memberships (
                id, member_id, plan_id, start_date, expiry_date, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.member_id.as_uuid())
        .bind(membership.plan_id.as_uuid())
        .bind(membership.start_date.as_datetime())
        .bind(membership.expiry_date.as_datetime())
        .bind(membership.status.as_str())
        .bind(membership.created_at.as_datetime())
        .bind(membership.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert membership: {}", e)))?;

        insert_payment(&mut tx, payment).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit registration: {}", e)))?;

        Ok(())
    }

    async fn renew(&self, membership: &Membership, payment: &Payment) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            UPDATE memberships SET
                plan_id = $2,
                expiry_date = $3,
                status = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.plan_id.as_uuid())
        .bind(membership.expiry_date.as_datetime())
        .bind(membership.status.as_str())
        .bind(membership.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update membership: {}", e)))?;

        insert_payment(&mut tx, payment).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit renewal: {}", e)))?;

        Ok(())
    }
}
