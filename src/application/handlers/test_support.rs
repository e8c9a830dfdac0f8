//! Shared mock ports for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::attendance::AttendanceRecord;
use crate::domain::corporate::{Company, CorporatePayment};
use crate::domain::foundation::{
    BillingMonth, CompanyId, DomainError, MemberId, MembershipId, Money, PlanId, Timestamp,
};
use crate::domain::member::MemberProfile;
use crate::domain::membership::{Membership, MembershipStatus};
use crate::domain::payment::Payment;
use crate::domain::plan::{Plan, PlanCategory, PlanDuration};
use crate::ports::{
    AttendanceRepository, CorporateRepository, DailyAttendance, EnrollmentRepository,
    ExpiringMembership, MemberRepository, MembershipRepository, PlanCatalog, ReportReader,
    StatusCounts,
};

// ════════════════════════════════════════════════════════════════════════════
// Plan catalog
// ════════════════════════════════════════════════════════════════════════════

pub struct MockPlanCatalog {
    plans: Mutex<Vec<Plan>>,
}

impl MockPlanCatalog {
    pub fn empty() -> Self {
        Self {
            plans: Mutex::new(Vec::new()),
        }
    }

    /// A catalog with one plan per category/duration combination.
    pub fn with_standard_plans() -> Self {
        let mut plans = Vec::new();
        for category in PlanCategory::ALL {
            for duration in PlanDuration::ALL {
                let base = match category {
                    PlanCategory::Tenant => 1_500,
                    PlanCategory::NonTenant => 2_000,
                    PlanCategory::Corporate => 5_000,
                };
                plans.push(Plan::new(
                    PlanId::new(),
                    category,
                    duration,
                    Money::from_major(base * duration.months() as i64),
                    matches!(category, PlanCategory::Corporate).then_some(5),
                ));
            }
        }
        Self {
            plans: Mutex::new(plans),
        }
    }

    pub fn plan_price(&self, category: PlanCategory, duration: PlanDuration) -> Money {
        self.find(category, duration).unwrap().price
    }

    pub fn plan_id(&self, category: PlanCategory, duration: PlanDuration) -> PlanId {
        self.find(category, duration).unwrap().id
    }

    fn find(&self, category: PlanCategory, duration: PlanDuration) -> Option<Plan> {
        self.plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.category == category && p.duration == duration)
            .cloned()
    }
}

#[async_trait]
impl PlanCatalog for MockPlanCatalog {
    async fn price_of(
        &self,
        category: PlanCategory,
        duration: PlanDuration,
    ) -> Result<Plan, DomainError> {
        self.find(category, duration)
            .ok_or_else(|| DomainError::plan_not_found(category, duration))
    }

    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        Ok(self.plans.lock().unwrap().clone())
    }

    async fn update_price(&self, id: PlanId, price: Money) -> Result<Plan, DomainError> {
        let mut plans = self.plans.lock().unwrap();
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::plan_not_found("?", "?"))?;
        plan.price = price;
        Ok(plan.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Enrollment repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockEnrollmentRepository {
    registered: Mutex<Vec<(MemberProfile, Membership, Payment)>>,
    renewed: Mutex<Vec<(Membership, Payment)>>,
    fail_writes: bool,
}

impl MockEnrollmentRepository {
    pub fn new() -> Self {
        Self {
            registered: Mutex::new(Vec::new()),
            renewed: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn registered(&self) -> Vec<(MemberProfile, Membership, Payment)> {
        self.registered.lock().unwrap().clone()
    }

    pub fn renewed(&self) -> Vec<(Membership, Payment)> {
        self.renewed.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnrollmentRepository for MockEnrollmentRepository {
    async fn register(
        &self,
        profile: &MemberProfile,
        membership: &Membership,
        payment: &Payment,
    ) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::store("simulated write failure"));
        }
        self.registered
            .lock()
            .unwrap()
            .push((profile.clone(), membership.clone(), payment.clone()));
        Ok(())
    }

    async fn renew(&self, membership: &Membership, payment: &Payment) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::store("simulated write failure"));
        }
        self.renewed
            .lock()
            .unwrap()
            .push((membership.clone(), payment.clone()));
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Member repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockMemberRepository {
    members: Mutex<Vec<MemberProfile>>,
    updated: Mutex<Vec<MemberProfile>>,
    deleted: Mutex<Vec<MemberId>>,
    has_payment_history: bool,
}

impl MockMemberRepository {
    pub fn empty() -> Self {
        Self {
            members: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            has_payment_history: false,
        }
    }

    pub fn with_member(profile: MemberProfile) -> Self {
        Self {
            members: Mutex::new(vec![profile]),
            ..Self::empty()
        }
    }

    /// A member whose payment history blocks deletion.
    pub fn with_paying_member(profile: MemberProfile) -> Self {
        Self {
            members: Mutex::new(vec![profile]),
            has_payment_history: true,
            ..Self::empty()
        }
    }

    pub fn updated(&self) -> Vec<MemberProfile> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<MemberId> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn find_by_id(&self, id: MemberId) -> Result<Option<MemberProfile>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn update(&self, profile: &MemberProfile) -> Result<(), DomainError> {
        self.updated.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn delete(&self, id: MemberId) -> Result<(), DomainError> {
        if self.has_payment_history {
            return Err(DomainError::has_payment_history(id));
        }
        self.members.lock().unwrap().retain(|m| m.id != id);
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Membership repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockMembershipRepository {
    memberships: Mutex<Vec<Membership>>,
    updated: Mutex<Vec<Membership>>,
}

impl MockMembershipRepository {
    pub fn empty() -> Self {
        Self {
            memberships: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn with_membership(membership: Membership) -> Self {
        Self {
            memberships: Mutex::new(vec![membership]),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn updated(&self) -> Vec<Membership> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl MembershipRepository for MockMembershipRepository {
    async fn find_by_id(&self, id: MembershipId) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_active_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.member_id == member_id && m.status.is_active())
            .cloned())
    }

    async fn find_latest_for_member(
        &self,
        member_id: MemberId,
    ) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.member_id == member_id)
            .max_by_key(|m| m.created_at)
            .cloned())
    }

    async fn update(&self, membership: &Membership) -> Result<(), DomainError> {
        let mut memberships = self.memberships.lock().unwrap();
        if let Some(existing) = memberships.iter_mut().find(|m| m.id == membership.id) {
            *existing = membership.clone();
        }
        self.updated.lock().unwrap().push(membership.clone());
        Ok(())
    }

    async fn expire_lapsed(&self, now: Timestamp) -> Result<u64, DomainError> {
        let mut count = 0;
        for m in self.memberships.lock().unwrap().iter_mut() {
            if m.status.is_active() && m.is_expired_at(now) {
                m.status = MembershipStatus::Expired;
                count += 1;
            }
        }
        Ok(count)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Attendance repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockAttendanceRepository {
    records: Mutex<Vec<AttendanceRecord>>,
}

impl MockAttendanceRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttendanceRepository for MockAttendanceRepository {
    async fn insert_if_absent(&self, record: &AttendanceRecord) -> Result<bool, DomainError> {
        let mut records = self.records.lock().unwrap();
        let taken = records
            .iter()
            .any(|r| r.member_id == record.member_id && r.attendance_date == record.attendance_date);
        if taken {
            return Ok(false);
        }
        records.push(record.clone());
        Ok(true)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Corporate repository
// ════════════════════════════════════════════════════════════════════════════

pub struct MockCorporateRepository {
    companies: Mutex<Vec<Company>>,
    billing_runs: Mutex<Vec<CorporatePayment>>,
    active_members: u64,
}

impl MockCorporateRepository {
    pub fn empty() -> Self {
        Self {
            companies: Mutex::new(Vec::new()),
            billing_runs: Mutex::new(Vec::new()),
            active_members: 0,
        }
    }

    pub fn with_company(company: Company) -> Self {
        Self {
            companies: Mutex::new(vec![company]),
            ..Self::empty()
        }
    }

    pub fn with_active_members(mut self, count: u64) -> Self {
        self.active_members = count;
        self
    }

    pub fn companies(&self) -> Vec<Company> {
        self.companies.lock().unwrap().clone()
    }

    pub fn billing_runs(&self) -> Vec<CorporatePayment> {
        self.billing_runs.lock().unwrap().clone()
    }
}

#[async_trait]
impl CorporateRepository for MockCorporateRepository {
    async fn create(&self, company: &Company) -> Result<(), DomainError> {
        self.companies.lock().unwrap().push(company.clone());
        Ok(())
    }

    async fn update(&self, company: &Company) -> Result<(), DomainError> {
        let mut companies = self.companies.lock().unwrap();
        if let Some(existing) = companies.iter_mut().find(|c| c.id == company.id) {
            *existing = company.clone();
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CompanyId) -> Result<Option<Company>, DomainError> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Company>, DomainError> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn active_member_count(&self, _id: CompanyId) -> Result<u64, DomainError> {
        Ok(self.active_members)
    }

    async fn record_billing_run(
        &self,
        payment: &CorporatePayment,
        _now: Timestamp,
    ) -> Result<u64, DomainError> {
        self.billing_runs.lock().unwrap().push(payment.clone());
        Ok(self.active_members)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Report reader
// ════════════════════════════════════════════════════════════════════════════

pub struct MockReportReader {
    monthly_revenue: Money,
    corporate_revenue: Money,
    status_counts: StatusCounts,
    total_members: u64,
}

impl MockReportReader {
    pub fn new() -> Self {
        Self {
            monthly_revenue: Money::ZERO,
            corporate_revenue: Money::ZERO,
            status_counts: StatusCounts::default(),
            total_members: 0,
        }
    }

    pub fn with_monthly_revenue(mut self, amount: Money) -> Self {
        self.monthly_revenue = amount;
        self
    }

    pub fn with_corporate_revenue(mut self, amount: Money) -> Self {
        self.corporate_revenue = amount;
        self
    }
}

#[async_trait]
impl ReportReader for MockReportReader {
    async fn monthly_revenue(&self, _month: BillingMonth) -> Result<Money, DomainError> {
        Ok(self.monthly_revenue)
    }

    async fn corporate_monthly_revenue(
        &self,
        _month: BillingMonth,
    ) -> Result<Money, DomainError> {
        Ok(self.corporate_revenue)
    }

    async fn membership_status_counts(
        &self,
        _now: Timestamp,
    ) -> Result<StatusCounts, DomainError> {
        Ok(self.status_counts)
    }

    async fn total_member_count(&self) -> Result<u64, DomainError> {
        Ok(self.total_members)
    }

    async fn expiring_soon(
        &self,
        _now: Timestamp,
        _window_days: i64,
    ) -> Result<Vec<ExpiringMembership>, DomainError> {
        Ok(Vec::new())
    }

    async fn attendance_count_on(&self, _date: NaiveDate) -> Result<u64, DomainError> {
        Ok(0)
    }

    async fn daily_attendance(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<DailyAttendance>, DomainError> {
        Ok(Vec::new())
    }
}
