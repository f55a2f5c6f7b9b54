//! Date and time parsing helpers
//!
//! This module turns the textual and numeric shapes a post's front matter may
//! carry into a calendar date. It deliberately accepts only a handful of
//! well-known layouts rather than guessing at arbitrary strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-only layout (e.g. "2024-03-05")
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Naive date-time layouts tried after RFC 3339, in order
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Parse the reduced ISO forms `YYYY` and `YYYY-MM`, both on day 1
pub fn parse_reduced_date(date_str: &str) -> Option<NaiveDate> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let (year, month) = match date_str.split_once('-') {
        None if date_str.len() == 4 => (date_str, "1"),
        Some((year, month)) if year.len() == 4 && month.len() == 2 => (year, month),
        _ => return None,
    };

    if !all_digits(year) || !all_digits(month) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Resolve a date or date-time string to the calendar date it names
///
/// Strategies, first match wins:
/// 1. `YYYY-MM-DD`, or the reduced `YYYY-MM` / `YYYY`
/// 2. RFC 3339 with offset (e.g. "2024-03-05T10:00:00Z"), taken in UTC
/// 3. Naive ISO 8601 date-time with `T` or space separator
/// 4. RFC 2822 (e.g. "Tue, 5 Mar 2024 10:00:00 +0000"), taken in UTC
///
/// Returns `None` when no strategy applies.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = parse_date(trimmed) {
        return Some(date);
    }

    if let Some(date) = parse_reduced_date(trimmed) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(dt.date());
    }

    DateTime::parse_from_rfc2822(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// Calendar date (UTC) of a millisecond Unix timestamp
pub fn date_from_timestamp_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
