//! Membership lifecycle types.

mod aggregate;
mod status;

pub use aggregate::Membership;
pub use status::MembershipStatus;
