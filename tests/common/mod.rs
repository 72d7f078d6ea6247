use std::cell::RefCell;
use std::rc::Rc;

use rest_client::Logger;
use serde_json::Value;

/// Captures every logged event for later assertions.
pub struct RecordingLogger(pub Rc<RefCell<Vec<(String, Option<Value>)>>>);

impl RecordingLogger {
    pub fn new() -> (RecordingLogger, Rc<RefCell<Vec<(String, Option<Value>)>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (RecordingLogger(Rc::clone(&events)), events)
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str, data: Option<&Value>) {
        self.0
            .borrow_mut()
            .push((message.to_string(), data.cloned()));
    }
}

pub fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
