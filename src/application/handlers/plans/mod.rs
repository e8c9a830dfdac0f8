mod list_plans;
mod update_plan_price;

pub use list_plans::ListPlansHandler;
pub use update_plan_price::{UpdatePlanPriceCommand, UpdatePlanPriceHandler};
