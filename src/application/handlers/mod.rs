#[cfg(test)]
pub(crate) mod test_support;

pub mod attendance;
pub mod corporate;
pub mod member;
pub mod membership;
pub mod payment;
pub mod plans;
pub mod reports;
