use serde_json::json;

use crate::logger::print::PrintLogger;
use crate::logger::{Logger, NoopLogger};

#[test]
fn print_logger_formats_events() {
    let logger = PrintLogger::new(Vec::new());
    logger.log("Send request.", Some(&json!({"Url": "http://api.test"})));
    logger.log("Successfully got the response.", None);

    let buf = String::from_utf8(logger.into_inner()).unwrap();
    assert_eq!(
        buf,
        "Send request. Parameters {\"Url\":\"http://api.test\"}\n\
         Successfully got the response.\n"
    );
}

#[test]
fn noop_logger_swallows_events() {
    // nothing to observe, it just must not panic
    NoopLogger.log("Send request.", Some(&json!({})));
    NoopLogger.log("Send request.", None);
}
