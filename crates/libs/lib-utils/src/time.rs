//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC calendar date.
pub fn today_utc() -> NaiveDate {
    now_utc().date_naive()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Format a date as `YYYY-MM-DD`, the stamp used in download file names.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable timestamp, e.g. `Jan 5, 2024, 09:30 AM`.
pub fn format_display(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_stamp() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_stamp(date), "2024-03-07");
    }

    #[test]
    fn test_format_display() {
        let time = parse_utc("2024-01-05T09:30:00Z").unwrap();
        assert_eq!(format_display(time), "Jan 5, 2024, 09:30 AM");
    }

    #[test]
    fn test_parse_utc_rejects_plain_date() {
        assert!(parse_utc("2024-01-05").is_err());
    }
}
