//! Plan category classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Who a plan is sold to.
///
/// Tenants of the building get preferential rates; corporate plans are
/// billed to a sponsoring company rather than the member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanCategory {
    Tenant,
    NonTenant,
    Corporate,
}

impl PlanCategory {
    pub const ALL: [PlanCategory; 3] = [
        PlanCategory::Tenant,
        PlanCategory::NonTenant,
        PlanCategory::Corporate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanCategory::Tenant => "tenant",
            PlanCategory::NonTenant => "non_tenant",
            PlanCategory::Corporate => "corporate",
        }
    }
}

impl fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tenant" => Ok(PlanCategory::Tenant),
            "non_tenant" => Ok(PlanCategory::NonTenant),
            "corporate" => Ok(PlanCategory::Corporate),
            other => Err(ValidationError::invalid_value(
                "category",
                format!("unknown plan category '{}'", other),
            )),
        }
    }
}
