//! Billing month value object.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timestamp;

/// A calendar month used as a billing period key.
///
/// Revenue queries and corporate billing runs operate on the half-open
/// window [first day of month, first day of next month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingMonth {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl BillingMonth {
    /// Creates a billing month, if the month number is valid.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The billing month containing the given instant.
    pub fn containing(ts: Timestamp) -> Self {
        let date = ts.date();
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of the month. Used as the persisted key for
    /// corporate payment rows.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap()
    }

    /// The following billing month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Half-open timestamp window [month start, next month start).
    pub fn window(&self) -> (Timestamp, Timestamp) {
        (
            Timestamp::start_of_day(self.first_day()),
            Timestamp::start_of_day(self.next().first_day()),
        )
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
