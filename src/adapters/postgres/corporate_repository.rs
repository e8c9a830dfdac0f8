//! PostgreSQL implementation of CorporateRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::corporate::{Company, CorporatePayment};
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, Money, Timestamp};
use crate::ports::CorporateRepository;

pub struct PostgresCorporateRepository {
    pool: PgPool,
}

impl PostgresCorporateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    company_name: String,
    contact_person: String,
    contact_phone: String,
    rate_per_member_cents: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: CompanyId::from_uuid(row.id),
            company_name: row.company_name,
            contact_person: row.contact_person,
            contact_phone: row.contact_phone,
            rate_per_member: Money::from_minor(row.rate_per_member_cents),
            is_active: row.is_active,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

const COMPANY_COLUMNS: &str =
    "id, company_name, contact_person, contact_phone, rate_per_member_cents, is_active, created_at";

#[async_trait]
impl CorporateRepository for PostgresCorporateRepository {
    async fn create(&self, company: &Company) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO corporates (
                id, company_name, contact_person, contact_phone,
                rate_per_member_cents, is_active, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(company.id.as_uuid())
        .bind(&company.company_name)
        .bind(&company.contact_person)
        .bind(&company.contact_phone)
        .bind(company.rate_per_member.as_minor())
        .bind(company.is_active)
        .bind(company.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert company: {}", e)))?;

        Ok(())
    }

    async fn update(&self, company: &Company) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE corporates SET
                company_name = $2,
                contact_person = $3,
                contact_phone = $4,
                rate_per_member_cents = $5,
                is_active = $6
            WHERE id = $1
            "#,
        )
        .bind(company.id.as_uuid())
        .bind(&company.company_name)
        .bind(&company.contact_person)
        .bind(&company.contact_phone)
        .bind(company.rate_per_member.as_minor())
        .bind(company.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update company: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CompanyNotFound,
                format!("Company {} not found", company.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM corporates WHERE id = $1",
            COMPANY_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find company: {}", e)))?;

        Ok(row.map(Company::from))
    }

    async fn list(&self) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM corporates ORDER BY company_name",
            COMPANY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list companies: {}", e)))?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn active_member_count(&self, id: CompanyId) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM profiles p
            JOIN memberships m ON m.member_id = p.id AND m.status = 'active'
            WHERE p.corporate_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to count members: {}", e)))?;

        Ok(count as u64)
    }

    async fn record_billing_run(
        &self,
        payment: &CorporatePayment,
        now: Timestamp,
    ) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO corporate_payments (
                id, corporate_id, amount_cents, members_count, billing_month, paid_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.company_id.as_uuid())
        .bind(payment.amount.as_minor())
        .bind(payment.members_count as i32)
        .bind(payment.billing_month.first_day())
        .bind(payment.paid_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert corporate payment: {}", e)))?;

        // The paid month replaces whatever period each sponsored active
        // membership was on.
        let (start, _) = payment.billing_month.window();
        let month_end = Timestamp::start_of_day(payment.billing_month.last_day());
        let result = sqlx::query(
            r#"
            UPDATE memberships SET
                start_date = $2,
                expiry_date = $3,
                status = 'active',
                updated_at = $4
            WHERE status = 'active'
              AND member_id IN (SELECT id FROM profiles WHERE corporate_id = $1)
            "#,
        )
        .bind(payment.company_id.as_uuid())
        .bind(start.as_datetime())
        .bind(month_end.as_datetime())
        .bind(now.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to reset memberships: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit billing run: {}", e)))?;

        Ok(result.rows_affected())
    }
}
