//! Membership aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BillingMonth, MemberId, MembershipId, PlanId, Timestamp};
use crate::domain::plan::PlanDuration;

use super::MembershipStatus;

/// A member's enrollment on a plan for a bounded period.
///
/// Each member holds at most one active membership at a time; renewals
/// extend this record in place rather than opening a second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub member_id: MemberId,
    pub plan_id: PlanId,
    pub start_date: Timestamp,
    pub expiry_date: Timestamp,
    pub status: MembershipStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Membership {
    /// Opens a new membership running from `now` for the plan duration.
    ///
    /// Expiry lands on the same day-of-month where the target month has
    /// one, clamped to the month's last day otherwise.
    pub fn start(
        id: MembershipId,
        member_id: MemberId,
        plan_id: PlanId,
        plan_duration: PlanDuration,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            member_id,
            plan_id,
            start_date: now,
            expiry_date: plan_duration.extend(now),
            status: MembershipStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Extends the membership by the plan duration and reactivates it.
    ///
    /// When the membership has not lapsed yet the new period stacks on
    /// the current expiry, so renewing early never costs paid-for days.
    /// A lapsed membership restarts from `now` instead.
    pub fn extend(&mut self, plan_id: PlanId, plan_duration: PlanDuration, now: Timestamp) {
        let base = if self.expiry_date.is_after(&now) {
            self.expiry_date
        } else {
            now
        };
        self.plan_id = plan_id;
        self.expiry_date = plan_duration.extend(base);
        self.status = MembershipStatus::Active;
        self.updated_at = now;
    }

    /// Marks the membership expired ahead of its natural expiry.
    pub fn deactivate(&mut self, now: Timestamp) {
        self.status = MembershipStatus::Expired;
        self.updated_at = now;
    }

    /// Rewrites the period to cover exactly the given calendar month.
    ///
    /// Used by the corporate billing run, which bills companies month by
    /// month regardless of when each member first enrolled.
    pub fn reset_to_month(&mut self, month: BillingMonth, now: Timestamp) {
        let (start, _) = month.window();
        self.start_date = start;
        self.expiry_date = Timestamp::start_of_day(month.last_day());
        self.status = MembershipStatus::Active;
        self.updated_at = now;
    }

    /// True once the expiry date has passed, regardless of stored status.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !self.expiry_date.is_after(&now)
    }

    /// True for active memberships expiring within the next `days` days.
    pub fn expires_within(&self, now: Timestamp, days: i64) -> bool {
        self.status.is_active()
            && self.expiry_date.is_after(&now)
            && !self.expiry_date.is_after(&now.add_days(days))
    }
}
