//! GetDashboardOverviewHandler - Query handler for the front-desk dashboard.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{BillingMonth, DomainError, Money, Timestamp};
use crate::ports::{DailyAttendance, ExpiringMembership, ReportReader, StatusCounts};

/// How far ahead the dashboard warns about expiring memberships.
const EXPIRY_WARNING_DAYS: i64 = 7;

/// Everything the dashboard shows in one read.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub total_members: u64,
    pub status_counts: StatusCounts,
    pub monthly_revenue: Money,
    pub corporate_monthly_revenue: Money,
    pub today_attendance: u64,
    pub last_7_days_attendance: Vec<DailyAttendance>,
    pub expiring_soon: Vec<ExpiringMembership>,
}

pub struct GetDashboardOverviewHandler {
    reader: Arc<dyn ReportReader>,
}

impl GetDashboardOverviewHandler {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<DashboardOverview, DomainError> {
        let now = Timestamp::now();
        let month = BillingMonth::containing(now);
        let today = now.date();

        Ok(DashboardOverview {
            total_members: self.reader.total_member_count().await?,
            status_counts: self.reader.membership_status_counts(now).await?,
            monthly_revenue: self.reader.monthly_revenue(month).await?,
            corporate_monthly_revenue: self.reader.corporate_monthly_revenue(month).await?,
            today_attendance: self.reader.attendance_count_on(today).await?,
            last_7_days_attendance: self
                .reader
                .daily_attendance(today - chrono::Days::new(6), today)
                .await?,
            expiring_soon: self.reader.expiring_soon(now, EXPIRY_WARNING_DAYS).await?,
        })
    }
}
