//! PostgreSQL implementation of AttendanceRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::attendance::AttendanceRecord;
use crate::domain::foundation::DomainError;
use crate::ports::AttendanceRepository;

pub struct PostgresAttendanceRepository {
    pool: PgPool,
}

impl PostgresAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepository {
    async fn insert_if_absent(&self, record: &AttendanceRecord) -> Result<bool, DomainError> {
        // The unique index on (member_id, attendance_date) makes the
        // once-per-day rule hold under concurrent check-ins.
        let result = sqlx::query(
            r#"
            INSERT INTO attendance (id, member_id, attendance_date, checked_in_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (member_id, attendance_date) DO NOTHING
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.member_id.as_uuid())
        .bind(record.attendance_date)
        .bind(record.checked_in_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to record attendance: {}", e)))?;

        Ok(result.rows_affected() == 1)
    }
}
