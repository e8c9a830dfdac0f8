//! Corporate sponsor types.

mod billing;
mod company;

pub use billing::CorporatePayment;
pub use company::{Company, DEFAULT_RATE_PER_MEMBER};
