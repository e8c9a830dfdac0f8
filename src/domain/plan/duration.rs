//! Plan duration and its calendar offset rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// How long one paid period of a plan runs.
///
/// The offset is calendar-aware: one month from Jan 15 is Feb 15, and
/// month-end dates clamp (Jan 31 + 1 month lands on the last day of
/// February), never a fixed 30-day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanDuration {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl PlanDuration {
    pub const ALL: [PlanDuration; 4] = [
        PlanDuration::Monthly,
        PlanDuration::Quarterly,
        PlanDuration::SemiAnnual,
        PlanDuration::Annual,
    ];

    /// The calendar offset in whole months.
    pub fn months(&self) -> u32 {
        match self {
            PlanDuration::Monthly => 1,
            PlanDuration::Quarterly => 3,
            PlanDuration::SemiAnnual => 6,
            PlanDuration::Annual => 12,
        }
    }

    /// Applies this duration's offset to an anchor date.
    pub fn extend(&self, from: Timestamp) -> Timestamp {
        from.add_calendar_months(self.months())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDuration::Monthly => "monthly",
            PlanDuration::Quarterly => "quarterly",
            PlanDuration::SemiAnnual => "semi_annual",
            PlanDuration::Annual => "annual",
        }
    }
}

impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanDuration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PlanDuration::Monthly),
            "quarterly" => Ok(PlanDuration::Quarterly),
            "semi_annual" => Ok(PlanDuration::SemiAnnual),
            "annual" => Ok(PlanDuration::Annual),
            other => Err(ValidationError::invalid_value(
                "duration",
                format!("unknown plan duration '{}'", other),
            )),
        }
    }
}
