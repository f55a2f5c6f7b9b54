//! Utility modules for datelabel.
//!
//! - [`datetime`] - Parsing of date strings and timestamps into calendar dates

pub mod datetime;
