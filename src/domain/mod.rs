//! Domain layer - entities, value objects and business rules.
//!
//! No I/O happens here; persistence is reached through the traits in
//! [`crate::ports`].

pub mod attendance;
pub mod corporate;
pub mod foundation;
pub mod member;
pub mod membership;
pub mod payment;
pub mod plan;
