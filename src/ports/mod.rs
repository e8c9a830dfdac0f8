//! Port traits the application layer depends on.
//!
//! Adapters implement these; handlers receive them as `Arc<dyn Trait>`.

mod attendance_repository;
mod corporate_repository;
mod enrollment_repository;
mod member_repository;
mod membership_repository;
mod plan_catalog;
mod report_reader;

pub use attendance_repository::AttendanceRepository;
pub use corporate_repository::CorporateRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use member_repository::MemberRepository;
pub use membership_repository::MembershipRepository;
pub use plan_catalog::PlanCatalog;
pub use report_reader::{DailyAttendance, ExpiringMembership, ReportReader, StatusCounts};
