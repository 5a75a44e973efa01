//! UTC calendar helpers for approach timestamps.
//!
//! Approach times are stored as Unix epoch milliseconds. Date filters compare
//! whole UTC days, so this module maps epoch values onto `chrono` dates.
//! Epoch values outside chrono's supported range have no calendar day.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CALENDAR_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid calendar date regex")
});

/// Error for calendar date strings that are not `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDateError {
    /// Input does not have the `YYYY-MM-DD` shape.
    Malformed(String),
    /// Shape is valid but month/day are out of range.
    OutOfRange(String),
}

impl Display for CalendarDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "expected date as YYYY-MM-DD, got `{value}`"),
            Self::OutOfRange(value) => write!(f, "date does not exist: `{value}`"),
        }
    }
}

impl Error for CalendarDateError {}

/// A UTC calendar day.
///
/// Always a real day within chrono's supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date, returning `None` for non-existent or unsupported days.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a strict `YYYY-MM-DD` string. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Result<Self, CalendarDateError> {
        let trimmed = value.trim();
        let captures = CALENDAR_DATE_RE
            .captures(trimmed)
            .ok_or_else(|| CalendarDateError::Malformed(trimmed.to_string()))?;

        let field = |index: usize| -> Result<u32, CalendarDateError> {
            captures[index]
                .parse::<u32>()
                .map_err(|_| CalendarDateError::Malformed(trimmed.to_string()))
        };
        let year = field(1)? as i32;
        let month = field(2)?;
        let day = field(3)?;

        Self::new(year, month, day)
            .ok_or_else(|| CalendarDateError::OutOfRange(trimmed.to_string()))
    }

    /// Returns the UTC day containing `epoch_ms`, or `None` when the value is
    /// outside chrono's range.
    pub fn from_epoch_ms(epoch_ms: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(epoch_ms).map(|time| Self(time.date_naive()))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn day_number(self) -> i64 {
        self.0
            .signed_duration_since(DateTime::<Utc>::UNIX_EPOCH.date_naive())
            .num_days()
    }

    /// Epoch milliseconds of midnight UTC on this day.
    pub fn start_epoch_ms(self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Formats `epoch_ms` as `YYYY-MM-DD HH:MM` in UTC.
///
/// Values outside chrono's range are rendered as `epoch_ms=<value>`.
pub fn format_epoch_minutes(epoch_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("epoch_ms={epoch_ms}"),
    }
}
