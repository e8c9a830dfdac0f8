//! Read-side port for dashboards and financial reports.
//!
//! Reads bypass the aggregates and query the store directly; none of
//! these methods mutate state.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{
    BillingMonth, DomainError, MemberId, MembershipId, Money, Timestamp,
};

/// Membership counts split by effective status at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: u64,
    pub expired: u64,
}

/// An active membership inside the expiry warning window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringMembership {
    pub membership_id: MembershipId,
    pub member_id: MemberId,
    pub full_name: String,
    pub phone: String,
    pub expiry_date: Timestamp,
}

/// Check-in volume for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub count: u64,
}

#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Sum of individual payments recorded during the month.
    async fn monthly_revenue(&self, month: BillingMonth) -> Result<Money, DomainError>;

    /// Sum of corporate billing runs recorded for the month.
    async fn corporate_monthly_revenue(&self, month: BillingMonth)
        -> Result<Money, DomainError>;

    /// Counts memberships by effective status: an active row whose
    /// expiry has passed counts as expired.
    async fn membership_status_counts(&self, now: Timestamp)
        -> Result<StatusCounts, DomainError>;

    async fn total_member_count(&self) -> Result<u64, DomainError>;

    /// Active memberships expiring within the next `window_days` days,
    /// soonest first.
    async fn expiring_soon(
        &self,
        now: Timestamp,
        window_days: i64,
    ) -> Result<Vec<ExpiringMembership>, DomainError>;

    async fn attendance_count_on(&self, date: NaiveDate) -> Result<u64, DomainError>;

    /// Per-day check-in counts over `[from, to]` inclusive, with zero
    /// rows for days without visits.
    async fn daily_attendance(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyAttendance>, DomainError>;
}
