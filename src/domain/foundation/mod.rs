//! Foundation types shared across the domain.

mod errors;
mod ids;
mod money;
mod month;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    AttendanceId, CompanyId, CorporatePaymentId, MemberId, MembershipId, PaymentId, PlanId,
};
pub use money::Money;
pub use month::BillingMonth;
pub use timestamp::Timestamp;
