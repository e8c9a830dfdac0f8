//! GetFinancialReportHandler - Query handler for monthly revenue totals.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{BillingMonth, DomainError, Money};
use crate::ports::ReportReader;

#[derive(Debug, Clone, Copy)]
pub struct GetFinancialReportQuery {
    pub month: BillingMonth,
}

/// Revenue for one month, split by source.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FinancialReport {
    pub month: BillingMonth,
    pub individual_revenue: Money,
    pub corporate_revenue: Money,
    pub total_revenue: Money,
}

pub struct GetFinancialReportHandler {
    reader: Arc<dyn ReportReader>,
}

impl GetFinancialReportHandler {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetFinancialReportQuery,
    ) -> Result<FinancialReport, DomainError> {
        let individual_revenue = self.reader.monthly_revenue(query.month).await?;
        let corporate_revenue = self.reader.corporate_monthly_revenue(query.month).await?;

        Ok(FinancialReport {
            month: query.month,
            individual_revenue,
            corporate_revenue,
            total_revenue: individual_revenue + corporate_revenue,
        })
    }
}
