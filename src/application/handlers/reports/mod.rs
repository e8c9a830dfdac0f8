mod get_dashboard_overview;
mod get_financial_report;

pub use get_dashboard_overview::{DashboardOverview, GetDashboardOverviewHandler};
pub use get_financial_report::{FinancialReport, GetFinancialReportHandler, GetFinancialReportQuery};
