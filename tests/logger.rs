use datelabel::config::LoggingConfig;
use datelabel::logger::{self, Logger};
use datelabel::DateLabelFormatter;
use icu::locale::locale;

// The global logger can only be installed once per process, so every
// diagnostic check lives in this single test.
#[test]
fn test_failures_emit_one_error_record() {
    let recorder = Logger::new();
    let config = LoggingConfig {
        level: "error".to_string(),
    };
    logger::init_with_recorder(&config, &recorder).unwrap();

    let formatter = DateLabelFormatter::with_locale(locale!("en-GB"));

    assert_eq!(formatter.format("2024-03-05"), "5 Mar 2024");
    assert!(recorder.get_logs().is_empty(), "success path must not log");

    assert_eq!(formatter.format("not-a-date"), "");
    let logs = recorder.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("ERROR"));
    assert!(logs[0].contains("datelabel::format"));
    assert!(logs[0].contains("\"not-a-date\""));
    assert!(logs[0].contains("unrecognized date format"));

    recorder.clear();
    assert_eq!(formatter.format(Option::<&str>::None), "");
    let logs = recorder.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("null"));

    // try_format hands the error back instead of logging it
    recorder.clear();
    assert!(formatter.try_format("not-a-date").is_err());
    assert!(recorder.get_logs().is_empty());

    // A second install is rejected
    assert!(logger::init(&config).is_err());
}
