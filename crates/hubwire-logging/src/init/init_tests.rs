#![allow(non_snake_case)]

use super::*;

// The global subscriber can only be installed once per process, so both
// calls live in one test.
#[test]
fn init_logging___second_call___returns_false_and_keeps_handle() {
    let first = init_logging_from_config(&CodecConfig::new().with_log_level(LogLevel::Warn));
    let second = init_logging(LogLevel::Debug);

    assert!(first);
    assert!(!second);
    assert!(ReloadHandle::global().is_initialized());
    assert!(ReloadHandle::global().reload_level(LogLevel::Error).is_ok());
}
