use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Date format used in the store and in callback tokens.
pub const QUIZ_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_quiz_date(date: NaiveDate) -> String {
    date.format(QUIZ_DATE_FORMAT).to_string()
}

pub fn parse_quiz_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), QUIZ_DATE_FORMAT)
        .map_err(|_| anyhow!("Invalid quiz date '{}', expected DD.MM.YYYY", input))
}

/// Second-granularity timestamp recorded next to a submission outcome.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
