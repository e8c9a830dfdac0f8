//! Membership plan catalog types.

mod aggregate;
mod category;
mod duration;

pub use aggregate::Plan;
pub use category::PlanCategory;
pub use duration::PlanDuration;
