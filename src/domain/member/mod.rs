//! Member profile types.

mod profile;
mod role;

pub use profile::MemberProfile;
pub use role::MemberRole;
