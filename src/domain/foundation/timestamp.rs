//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the UTC calendar date of this instant.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by adding whole calendar months.
    ///
    /// Calendar-aware: Jan 31 + 1 month clamps to the end of February
    /// rather than drifting by a fixed day count.
    pub fn add_calendar_months(&self, months: u32) -> Self {
        Self(
            self.0
                .checked_add_months(Months::new(months))
                .expect("timestamp out of calendar range"),
        )
    }

    /// Returns the start of the given UTC calendar day.
    pub fn start_of_day(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(0, 0, 0).unwrap().and_utc())
    }

    /// Returns the half-open window [start of day, start of next day)
    /// covering the given UTC calendar day.
    pub fn day_window(date: NaiveDate) -> (Self, Self) {
        let start = Self::start_of_day(date);
        (start, start.add_days(1))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, 10, 30, 0).unwrap())
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn add_calendar_months_keeps_day_of_month() {
        let start = ts(2024, 1, 15);
        let end = start.add_calendar_months(1);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    }

    #[test]
    fn add_calendar_months_clamps_end_of_month() {
        let start = ts(2024, 1, 31);
        let end = start.add_calendar_months(1);
        // 2024 is a leap year
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn add_twelve_months_is_one_year() {
        let start = ts(2024, 3, 10);
        let end = start.add_calendar_months(12);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn day_window_covers_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let (start, end) = Timestamp::day_window(date);
        assert_eq!(start.date(), date);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert!(start.is_before(&end));
    }

    #[test]
    fn ordering_works() {
        let earlier = ts(2024, 1, 1);
        let later = ts(2024, 1, 2);
        assert!(earlier < later);
        assert!(later.is_after(&earlier));
    }

    #[test]
    fn serializes_as_rfc3339() {
        let json = serde_json::to_string(&ts(2024, 1, 15)).unwrap();
        assert!(json.contains("2024-01-15"));
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), ts(2024, 1, 15));
    }

    #[test]
    fn date_returns_utc_day() {
        assert_eq!(
            ts(2024, 5, 7).date(),
            NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()
        );
        assert_eq!(ts(2024, 5, 7).date().year(), 2024);
    }
}
