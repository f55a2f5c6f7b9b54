//! Short date labels
//!
//! A [`DateLabelFormatter`] renders a date as day number, abbreviated month
//! name and full year, laid out the way its locale writes a medium-length
//! date ("5 Mar 2024" in en-GB, "Mar 5, 2024" in en-US, "2024年3月5日" in ja).
//! [`DateLabelFormatter::format`] never fails: an input that cannot be turned
//! into a date yields an empty label and an error-level log record.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use icu::calendar::Date;
use icu::datetime::fieldsets::YMD;
use icu::datetime::DateTimeFormatter;
use icu::locale::Locale;
use once_cell::sync::Lazy;

use crate::input::DateInput;
use crate::locale;

/// Log target for formatting diagnostics
pub const LOG_TARGET: &str = "datelabel::format";

static DEFAULT_FORMATTER: Lazy<DateLabelFormatter> = Lazy::new(DateLabelFormatter::from_environment);

/// Errors raised while producing a date label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid date input {input}: {reason}")]
    InvalidDateInput { input: String, reason: String },
}

/// Locale-bound date formatter, built once and shared by every call
///
/// The field set is fixed: numeric day, abbreviated month, numeric year.
pub struct FormatterConfig {
    locale: Locale,
    formatter: DateTimeFormatter<YMD>,
}

impl FormatterConfig {
    /// Load the CLDR date patterns for `locale`
    pub fn try_new(locale: Locale) -> Result<Self, String> {
        let formatter = DateTimeFormatter::try_new(locale.clone().into(), YMD::medium())
            .map_err(|e| format!("no date patterns for locale {}: {}", locale, e))?;
        Ok(Self { locale, formatter })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

/// Formats date-like values into short labels
pub struct DateLabelFormatter {
    requested: Locale,
    config: Option<FormatterConfig>,
}

impl DateLabelFormatter {
    /// Formatter for `locale`, or for the fallback locale if `locale` has no data
    pub fn with_locale(locale: Locale) -> Self {
        let config = FormatterConfig::try_new(locale.clone())
            .or_else(|e| {
                log::warn!("{}, using {}", e, locale::fallback_locale());
                FormatterConfig::try_new(locale::fallback_locale())
            })
            .map_err(|e| log::error!(target: LOG_TARGET, "Date labels unavailable: {}", e))
            .ok();

        Self {
            requested: locale,
            config,
        }
    }

    /// Formatter for the host environment's default locale
    pub fn from_environment() -> Self {
        Self::with_locale(locale::detect_locale())
    }

    /// The process-wide formatter, built on first use
    pub fn shared() -> &'static DateLabelFormatter {
        &DEFAULT_FORMATTER
    }

    /// Locale the labels are rendered in
    pub fn locale(&self) -> &Locale {
        self.config
            .as_ref()
            .map(FormatterConfig::locale)
            .unwrap_or(&self.requested)
    }

    /// Format `input`, or return an empty string if it is not a valid date
    ///
    /// The failure is reported once through `log::error!` with the original
    /// input and the reason.
    pub fn format<I: Into<DateInput>>(&self, input: I) -> String {
        match self.format_input(&input.into()) {
            Ok(label) => label,
            Err(e) => {
                log::error!(target: LOG_TARGET, "Failed to format date label: {}", e);
                String::new()
            }
        }
    }

    /// Format `input`, returning the failure instead of logging it
    pub fn try_format<I: Into<DateInput>>(&self, input: I) -> Result<String, FormatError> {
        self.format_input(&input.into())
    }

    fn format_input(&self, input: &DateInput) -> Result<String, FormatError> {
        let date = input.to_calendar_date()?;
        self.render(date).map_err(|reason| FormatError::InvalidDateInput {
            input: input.to_string(),
            reason,
        })
    }

    fn render(&self, date: NaiveDate) -> Result<String, String> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| format!("no date formatter for locale {}", self.requested))?;
        let iso = Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8)
            .map_err(|e| format!("could not render {}: {}", date, e))?;
        Ok(config.formatter.format(&iso).to_string())
    }
}

impl fmt::Debug for FormatterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterConfig").field("locale", &self.locale).finish_non_exhaustive()
    }
}

impl fmt::Debug for DateLabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateLabelFormatter")
            .field("requested", &self.requested)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for DateLabelFormatter {
    fn default() -> Self {
        Self::with_locale(locale::fallback_locale())
    }
}

/// Format `input` with the process-wide formatter
///
/// Returns an empty string, and logs the failure, for inputs that are not dates.
pub fn format_date<I: Into<DateInput>>(input: I) -> String {
    DateLabelFormatter::shared().format(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone, Utc};
    use icu::locale::locale;

    fn en() -> DateLabelFormatter {
        DateLabelFormatter::with_locale(locale!("en-GB"))
    }

    #[test]
    fn test_iso_date_string() {
        assert_eq!(en().format("2024-03-05"), "5 Mar 2024");
    }

    #[test]
    fn test_timestamp() {
        let millis = Utc.with_ymd_and_hms(2021, 12, 31, 0, 0, 0).unwrap().timestamp_millis();
        assert_eq!(en().format(millis), "31 Dec 2021");
    }

    #[test]
    fn test_constructed_date() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(en().format(date), "1 Jan 2020");

        let dt = NaiveDateTime::parse_from_str("2020-01-01 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(en().format(dt), "1 Jan 2020");
    }

    #[test]
    fn test_invalid_returns_empty() {
        assert_eq!(en().format("not-a-date"), "");
        assert_eq!(en().format(DateInput::Null), "");
        assert_eq!(en().format(Option::<i64>::None), "");
    }

    #[test]
    fn test_try_format_reports_input() {
        let err = en().try_format("not-a-date").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidDateInput {
                input: "\"not-a-date\"".to_string(),
                reason: "unrecognized date format".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Invalid date input \"not-a-date\": unrecognized date format");
    }

    #[test]
    fn test_default_is_en_gb() {
        let f = DateLabelFormatter::default();
        assert_eq!(f.locale(), &locale!("en-GB"));
        assert_eq!(f.format("2024-03-05"), "5 Mar 2024");
    }

    #[test]
    fn test_field_order_follows_locale() {
        let us = DateLabelFormatter::with_locale(locale!("en-US"));
        assert_eq!(us.format("2024-03-05"), "Mar 5, 2024");

        let ja = DateLabelFormatter::with_locale(locale!("ja-JP")).format("2024-03-05");
        assert!(ja.starts_with("2024"), "{:?}", ja);
        assert!(ja.ends_with('5') || ja.ends_with('日'), "{:?}", ja);
        assert!(!ja.contains("  "), "{:?}", ja);

        let hu = DateLabelFormatter::with_locale(locale!("hu-HU")).format("2024-03-05");
        assert!(hu.starts_with("2024."), "{:?}", hu);
    }

    #[test]
    fn test_localized_month_names() {
        let de = DateLabelFormatter::with_locale(locale!("de-DE")).format("2024-03-05");
        assert!(de.starts_with("5. M"), "{:?}", de);
        assert!(de.ends_with("2024"), "{:?}", de);
    }

    #[test]
    fn test_five_digit_year_unsigned() {
        let date = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        let label = en().format(date);
        assert!(!label.contains('+'), "{:?}", label);
    }

    #[test]
    fn test_deterministic() {
        let f = en();
        let first = f.format("2023-11-09T08:15:00Z");
        for _ in 0..10 {
            assert_eq!(f.format("2023-11-09T08:15:00Z"), first);
        }
        assert_eq!(first, "9 Nov 2023");
    }
}
