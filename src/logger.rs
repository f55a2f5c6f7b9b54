//! Logging setup
//!
//! Diagnostics go through the `log` facade. [`init`] installs a `fern`
//! dispatch that writes to stderr; [`init_with_recorder`] additionally keeps
//! every record in a [`Logger`] so it can be read back.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::{LevelFilter, Metadata, Record};

use crate::config::LoggingConfig;

/// In-memory log sink shared across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn push(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.push(format!("{} {} {}", record.level(), record.target(), record.args()));
    }

    fn flush(&self) {}
}

/// Install the stderr logger
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    dispatch(config.level_filter()?)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

/// Install the stderr logger and mirror every record into `recorder`
pub fn init_with_recorder(config: &LoggingConfig, recorder: &Logger) -> anyhow::Result<()> {
    let sink: Box<dyn log::Log> = Box::new(recorder.clone());
    dispatch(config.level_filter()?)
        .chain(sink)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_push_and_clear() {
        let logger = Logger::new();
        logger.push("first".to_string());
        logger.push("second".to_string());

        let logs = logger.get_logs();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].ends_with("second"));
        assert!(logs[1].ends_with("first"));

        logger.clear();
        assert!(logger.get_logs().is_empty());
    }

    #[test]
    fn test_records_level_and_target() {
        let logger = Logger::new();
        logger.log(
            &Record::builder()
                .args(format_args!("bad input"))
                .level(log::Level::Error)
                .target("datelabel::format")
                .build(),
        );

        let logs = logger.get_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].ends_with("ERROR datelabel::format bad input"));
    }
}
