//! Attendance records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttendanceId, MemberId, Timestamp};

/// One gym visit. At most one record exists per member per UTC calendar
/// day; repeat check-ins on the same day are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub member_id: MemberId,
    pub attendance_date: NaiveDate,
    pub checked_in_at: Timestamp,
}

impl AttendanceRecord {
    /// Builds a record for the calendar day containing `checked_in_at`.
    pub fn check_in(id: AttendanceId, member_id: MemberId, checked_in_at: Timestamp) -> Self {
        Self {
            id,
            member_id,
            attendance_date: checked_in_at.date(),
            checked_in_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn attendance_date_follows_utc_day() {
        let late = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 23, 45, 0).unwrap());
        let record = AttendanceRecord::check_in(AttendanceId::new(), MemberId::new(), late);
        assert_eq!(
            record.attendance_date,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
    }
}
