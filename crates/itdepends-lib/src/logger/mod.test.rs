// Tests for logger initialization

use super::*;

#[test]
fn second_initialization_is_rejected() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
    };

    // Another test (or the first call here) may already have installed a
    // subscriber in this process; only the second call's outcome is asserted.
    let _ = Logger::init(config.clone());
    let second = Logger::init(config);
    assert!(matches!(
        second,
        Err(LoggerError::AlreadyInitialized | LoggerError::InitializationFailed { .. })
    ));
}

#[test]
fn verbosity_maps_and_clamps() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
}
