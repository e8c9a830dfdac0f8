//! PostgreSQL implementations of the ports.

mod attendance_repository;
mod corporate_repository;
mod enrollment_repository;
mod member_repository;
mod membership_repository;
mod plan_catalog;
mod report_reader;

pub use attendance_repository::PostgresAttendanceRepository;
pub use corporate_repository::PostgresCorporateRepository;
pub use enrollment_repository::PostgresEnrollmentRepository;
pub use member_repository::PostgresMemberRepository;
pub use membership_repository::PostgresMembershipRepository;
pub use plan_catalog::PostgresPlanCatalog;
pub use report_reader::PostgresReportReader;
