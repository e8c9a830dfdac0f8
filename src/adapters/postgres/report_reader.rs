//! PostgreSQL implementation of ReportReader.
//!
//! Aggregate queries for dashboards and financial reports. Status is
//! evaluated against the expiry date at query time, so rows the lapse
//! sweep has not visited yet still report correctly.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    BillingMonth, DomainError, MemberId, MembershipId, Money, Timestamp,
};
use crate::ports::{DailyAttendance, ExpiringMembership, ReportReader, StatusCounts};

pub struct PostgresReportReader {
    pool: PgPool,
}

impl PostgresReportReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExpiringRow {
    membership_id: Uuid,
    member_id: Uuid,
    full_name: String,
    phone: String,
    expiry_date: DateTime<Utc>,
}

impl From<ExpiringRow> for ExpiringMembership {
    fn from(row: ExpiringRow) -> Self {
        ExpiringMembership {
            membership_id: MembershipId::from_uuid(row.membership_id),
            member_id: MemberId::from_uuid(row.member_id),
            full_name: row.full_name,
            phone: row.phone,
            expiry_date: Timestamp::from_datetime(row.expiry_date),
        }
    }
}

#[async_trait]
impl ReportReader for PostgresReportReader {
    async fn monthly_revenue(&self, month: BillingMonth) -> Result<Money, DomainError> {
        let (start, end) = month.window();
        let (total,): (Option<i64>,) = sqlx::query_as(
            "SELECT SUM(amount_cents) FROM payments WHERE paid_at >= $1 AND paid_at < $2",
        )
        .bind(start.as_datetime())
        .bind(end.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to sum payments: {}", e)))?;

        Ok(Money::from_minor(total.unwrap_or(0)))
    }

    async fn corporate_monthly_revenue(
        &self,
        month: BillingMonth,
    ) -> Result<Money, DomainError> {
        let (total,): (Option<i64>,) = sqlx::query_as(
            "SELECT SUM(amount_cents) FROM corporate_payments WHERE billing_month = $1",
        )
        .bind(month.first_day())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to sum corporate payments: {}", e)))?;

        Ok(Money::from_minor(total.unwrap_or(0)))
    }

    async fn membership_status_counts(
        &self,
        now: Timestamp,
    ) -> Result<StatusCounts, DomainError> {
        let (active, expired): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'active' AND expiry_date > $1),
                COUNT(*) FILTER (WHERE status = 'expired' OR expiry_date <= $1)
            FROM memberships
            "#,
        )
        .bind(now.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to count memberships: {}", e)))?;

        Ok(StatusCounts {
            active: active as u64,
            expired: expired as u64,
        })
    }

    async fn total_member_count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to count members: {}", e)))?;

        Ok(count as u64)
    }

    async fn expiring_soon(
        &self,
        now: Timestamp,
        window_days: i64,
    ) -> Result<Vec<ExpiringMembership>, DomainError> {
        let cutoff = now.add_days(window_days);
        let rows: Vec<ExpiringRow> = sqlx::query_as(
            r#"
            SELECT m.id AS membership_id, p.id AS member_id, p.full_name, p.phone, m.expiry_date
            FROM memberships m
            JOIN profiles p ON p.id = m.member_id
            WHERE m.status = 'active'
              AND m.expiry_date > $1
              AND m.expiry_date <= $2
            ORDER BY m.expiry_date ASC
            "#,
        )
        .bind(now.as_datetime())
        .bind(cutoff.as_datetime())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find expiring memberships: {}", e)))?;

        Ok(rows.into_iter().map(ExpiringMembership::from).collect())
    }

    async fn attendance_count_on(&self, date: NaiveDate) -> Result<u64, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM attendance WHERE attendance_date = $1")
                .bind(date)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::store(format!("Failed to count attendance: {}", e)))?;

        Ok(count as u64)
    }

    async fn daily_attendance(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyAttendance>, DomainError> {
        // generate_series fills in days without visits as zero rows.
        let rows: Vec<(NaiveDate, i64)> = sqlx::query_as(
            r#"
            SELECT d.day::date, COUNT(a.id)
            FROM generate_series($1::date, $2::date, interval '1 day') AS d(day)
            LEFT JOIN attendance a ON a.attendance_date = d.day::date
            GROUP BY d.day
            ORDER BY d.day
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to load attendance series: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|(date, count)| DailyAttendance {
                date,
                count: count as u64,
            })
            .collect())
    }
}
