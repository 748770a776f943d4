//! Calendar dates and timestamps for feed queries and display
//!
//! All dates are UTC. Conversions use the days-from-civil algorithm over
//! the proleptic Gregorian calendar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A UTC calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    /// Today's date in UTC
    pub fn today() -> Self {
        Self::from_epoch_millis(now_millis())
    }

    pub fn from_epoch_millis(millis: i64) -> Self {
        Self::from_days(millis.div_euclid(MILLIS_PER_DAY))
    }

    /// Date from a count of days since 1970-01-01
    pub fn from_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = (yoe + era * 400 + if month <= 2 { 1 } else { 0 }) as i32;
        CalendarDate { year, month, day }
    }

    /// Days since 1970-01-01
    pub fn to_days(&self) -> i64 {
        let year = self.year as i64 - if self.month <= 2 { 1 } else { 0 };
        let era = year.div_euclid(400);
        let yoe = year.rem_euclid(400);
        let month = self.month as i64;
        let mp = if month > 2 { month - 3 } else { month + 9 };
        let doy = (153 * mp + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self::from_days(self.to_days() + days)
    }

    pub fn sub_days(&self, days: i64) -> Self {
        self.add_days(-days)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Format an epoch-millisecond timestamp as `YYYY-MM-DD HH:MM` (UTC)
pub fn format_timestamp(millis: i64) -> String {
    let date = CalendarDate::from_epoch_millis(millis);
    let minutes_of_day = millis.rem_euclid(MILLIS_PER_DAY) / 60_000;
    format!(
        "{} {:02}:{:02}",
        date,
        minutes_of_day / 60,
        minutes_of_day % 60
    )
}

pub fn days_to_millis(days: i64) -> i64 {
    days * MILLIS_PER_DAY
}
