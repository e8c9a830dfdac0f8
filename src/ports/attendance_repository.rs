//! Attendance port.

use async_trait::async_trait;

use crate::domain::attendance::AttendanceRecord;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Inserts the record unless one already exists for the same member
    /// and calendar day. Returns `false` when the day was already taken.
    async fn insert_if_absent(&self, record: &AttendanceRecord) -> Result<bool, DomainError>;
}
