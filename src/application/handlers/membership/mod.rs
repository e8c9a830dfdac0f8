mod deactivate_membership;
mod expire_lapsed;

pub use deactivate_membership::{DeactivateMembershipCommand, DeactivateMembershipHandler};
pub use expire_lapsed::{ExpireLapsedHandler, ExpireLapsedResult};
