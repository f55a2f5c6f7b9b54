//! Date-like input values
//!
//! [`DateInput`] is everything a caller may hand to the formatter: a string
//! from front matter, a millisecond timestamp, an already-built chrono value,
//! or something with no date semantics at all. Nothing is validated on the
//! way in; validity is decided when the input is coerced to a calendar date.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::format::FormatError;
use crate::utils::datetime;

/// A value that may represent a point in time
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// ISO 8601 / RFC 3339 / RFC 2822 text
    Text(String),
    /// Milliseconds since the Unix epoch
    Timestamp(i64),
    /// An absolute instant
    Instant(DateTime<Utc>),
    /// A wall-clock date-time without offset
    Local(NaiveDateTime),
    /// A plain calendar date
    Date(NaiveDate),
    /// Absent value
    Null,
    /// A value with no date semantics, described for diagnostics
    Unsupported(String),
}

impl DateInput {
    /// Coerce the input to the calendar date it names
    pub fn to_calendar_date(&self) -> Result<NaiveDate, FormatError> {
        match self {
            DateInput::Text(text) => datetime::parse_calendar_date(text)
                .ok_or_else(|| self.invalid("unrecognized date format")),
            DateInput::Timestamp(millis) => datetime::date_from_timestamp_millis(*millis)
                .ok_or_else(|| self.invalid("timestamp out of range")),
            DateInput::Instant(dt) => Ok(dt.date_naive()),
            DateInput::Local(dt) => Ok(dt.date()),
            DateInput::Date(date) => Ok(*date),
            DateInput::Null => Err(self.invalid("no value")),
            DateInput::Unsupported(_) => Err(self.invalid("value has no date semantics")),
        }
    }

    fn invalid(&self, reason: &str) -> FormatError {
        FormatError::InvalidDateInput {
            input: self.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Text(text) => write!(f, "{:?}", text),
            DateInput::Timestamp(millis) => write!(f, "{}", millis),
            DateInput::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateInput::Local(dt) => write!(f, "{}", dt),
            DateInput::Date(date) => write!(f, "{}", date),
            DateInput::Null => f.write_str("null"),
            DateInput::Unsupported(desc) => f.write_str(desc),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        DateInput::Text(value.clone())
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Local(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Instant(value.with_timezone(&Utc))
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Null, Into::into)
    }
}

impl From<Value> for DateInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DateInput::Null,
            Value::String(text) => DateInput::Text(text),
            Value::Number(number) => {
                if let Some(millis) = number.as_i64() {
                    return DateInput::Timestamp(millis);
                }
                // Fractional milliseconds are dropped, as a date constructor would
                match number.as_f64() {
                    Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        DateInput::Timestamp(f.trunc() as i64)
                    }
                    _ => DateInput::Unsupported(format!("number {}", number)),
                }
            }
            Value::Bool(b) => DateInput::Unsupported(format!("boolean {}", b)),
            Value::Array(items) => DateInput::Unsupported(format!("array of {} items", items.len())),
            Value::Object(map) => DateInput::Unsupported(format!("object with {} keys", map.len())),
        }
    }
}

impl From<&Value> for DateInput {
    fn from(value: &Value) -> Self {
        DateInput::from(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_none_is_null() {
        let input: DateInput = Option::<&str>::None.into();
        assert_eq!(input, DateInput::Null);
        let input: DateInput = Some("2024-03-05").into();
        assert_eq!(input, DateInput::Text("2024-03-05".to_string()));
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(DateInput::from(json!(null)), DateInput::Null);
        assert_eq!(DateInput::from(json!("2024-03-05")), DateInput::Text("2024-03-05".to_string()));
        assert_eq!(DateInput::from(json!(1_640_908_800_000_i64)), DateInput::Timestamp(1_640_908_800_000));
        assert_eq!(DateInput::from(json!(1500.9)), DateInput::Timestamp(1500));
        assert_eq!(DateInput::from(json!(-1500.9)), DateInput::Timestamp(-1500));
        assert!(matches!(DateInput::from(json!(true)), DateInput::Unsupported(_)));
        assert!(matches!(DateInput::from(json!({"day": 5})), DateInput::Unsupported(_)));
        assert!(matches!(DateInput::from(json!([2024, 3, 5])), DateInput::Unsupported(_)));
    }

    #[test]
    fn test_offset_datetime_normalised_to_utc() {
        let dt = DateTime::parse_from_rfc3339("2024-03-05T23:30:00-02:00").unwrap();
        let input = DateInput::from(dt);
        let expected = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(input.to_calendar_date().unwrap(), expected);
    }

    #[test]
    fn test_invalid_inputs_carry_original_value() {
        let err = DateInput::from("not-a-date").to_calendar_date().unwrap_err();
        let FormatError::InvalidDateInput { input, reason } = err;
        assert_eq!(input, "\"not-a-date\"");
        assert_eq!(reason, "unrecognized date format");

        let err = DateInput::Null.to_calendar_date().unwrap_err();
        assert!(err.to_string().contains("null"));
    }
}
