//! datelabel - short, localized date labels for a static blog
//!
//! The core is [`format_date`], which turns a date-like value into a label
//! such as "5 Mar 2024" and degrades to an empty string for values that are
//! not dates. The rest of the crate carries the site's build configuration
//! and the logging setup.
//!
//! # Modules
//!
//! * [`config`] - Site build settings, locale override, logging settings
//! * [`format`] - The date label formatter
//! * [`input`] - Date-like input values and their coercion
//! * [`locale`] - Host locale detection
//! * [`logger`] - `log` dispatch and in-memory recording
//! * [`utils`] - Date parsing helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Short date label formatting
pub mod format;

/// Date-like input values
pub mod input;

/// Host locale detection
pub mod locale;

/// Logging setup and in-memory log sink
pub mod logger;

/// Utility functions for date parsing
pub mod utils;

pub use format::{format_date, DateLabelFormatter, FormatError, FormatterConfig};
pub use input::DateInput;
