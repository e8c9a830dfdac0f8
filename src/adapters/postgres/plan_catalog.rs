//! PostgreSQL implementation of PlanCatalog.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Money, PlanId};
use crate::domain::plan::{Plan, PlanCategory, PlanDuration};
use crate::ports::PlanCatalog;

pub struct PostgresPlanCatalog {
    pool: PgPool,
}

impl PostgresPlanCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    category: String,
    duration: String,
    price_cents: i64,
    corporate_minimum: Option<i32>,
}

impl TryFrom<PlanRow> for Plan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        Ok(Plan {
            id: PlanId::from_uuid(row.id),
            category: parse_category(&row.category)?,
            duration: parse_duration(&row.duration)?,
            price: Money::from_minor(row.price_cents),
            corporate_minimum: row.corporate_minimum.map(|n| n as u32),
        })
    }
}

fn parse_category(s: &str) -> Result<PlanCategory, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::StoreUnavailable,
            format!("Invalid plan category value: {}", s),
        )
    })
}

fn parse_duration(s: &str) -> Result<PlanDuration, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::StoreUnavailable,
            format!("Invalid plan duration value: {}", s),
        )
    })
}

const PLAN_COLUMNS: &str = "id, category, duration, price_cents, corporate_minimum";

#[async_trait]
impl PlanCatalog for PostgresPlanCatalog {
    async fn price_of(
        &self,
        category: PlanCategory,
        duration: PlanDuration,
    ) -> Result<Plan, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(&format!(
            "SELECT {} FROM membership_plans WHERE category = $1 AND duration = $2",
            PLAN_COLUMNS
        ))
        .bind(category.as_str())
        .bind(duration.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to look up plan: {}", e)))?;

        row.map(Plan::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::plan_not_found(category, duration))
    }

    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(&format!(
            "SELECT {} FROM membership_plans WHERE id = $1",
            PLAN_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to find plan: {}", e)))?;

        row.map(Plan::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let rows: Vec<PlanRow> = sqlx::query_as(&format!(
            "SELECT {} FROM membership_plans ORDER BY category, duration",
            PLAN_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list plans: {}", e)))?;

        rows.into_iter().map(Plan::try_from).collect()
    }

    async fn update_price(&self, id: PlanId, price: Money) -> Result<Plan, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(&format!(
            "UPDATE membership_plans SET price_cents = $2 WHERE id = $1 RETURNING {}",
            PLAN_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(price.as_minor())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update plan price: {}", e)))?;

        row.map(Plan::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::new(ErrorCode::PlanNotFound, format!("Plan {} not found", id)))
    }
}
