//! CheckInHandler - Command handler for front-desk check-ins.

use std::sync::Arc;

use crate::domain::attendance::AttendanceRecord;
use crate::domain::foundation::{AttendanceId, DomainError, MemberId, Timestamp};
use crate::ports::{AttendanceRepository, MembershipRepository};

/// Command to record a gym visit for today.
#[derive(Debug, Clone)]
pub struct CheckInCommand {
    pub member_id: MemberId,
}

/// Handler for check-ins.
///
/// Requires a membership that is active right now; the stored status is
/// not trusted on its own, since the lapse sweep may not have run yet.
pub struct CheckInHandler {
    memberships: Arc<dyn MembershipRepository>,
    attendance: Arc<dyn AttendanceRepository>,
}

impl CheckInHandler {
    pub fn new(
        memberships: Arc<dyn MembershipRepository>,
        attendance: Arc<dyn AttendanceRepository>,
    ) -> Self {
        Self {
            memberships,
            attendance,
        }
    }

    pub async fn handle(&self, cmd: CheckInCommand) -> Result<AttendanceRecord, DomainError> {
        let now = Timestamp::now();

        // 1. The member must hold a membership that has not lapsed
        let membership = self
            .memberships
            .find_active_for_member(cmd.member_id)
            .await?
            .ok_or_else(|| DomainError::no_active_membership(cmd.member_id))?;
        if membership.is_expired_at(now) {
            return Err(DomainError::no_active_membership(cmd.member_id));
        }

        // 2. One visit per calendar day
        let record = AttendanceRecord::check_in(AttendanceId::new(), cmd.member_id, now);
        let inserted = self.attendance.insert_if_absent(&record).await?;
        if !inserted {
            return Err(DomainError::already_checked_in(cmd.member_id));
        }

        tracing::debug!(member_id = %cmd.member_id, date = %record.attendance_date, "check-in");
        Ok(record)
    }
}
