use std::cell::RefCell;
use std::io::Write;

use serde_json::Value;

use crate::logger::Logger;

/// Writes one `<message> Parameters <data>` line per event to any
/// [`Write`] sink, typically stderr.
pub struct PrintLogger<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> PrintLogger<W> {
    pub fn new(writer: W) -> PrintLogger<W> {
        PrintLogger {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Logger for PrintLogger<W> {
    fn log(&self, message: &str, data: Option<&Value>) {
        let line = match data {
            Some(data) => format!("{} Parameters {}\n", message, data),
            None => format!("{}\n", message),
        };
        // a failing sink must not fail the request
        let _ = self.writer.borrow_mut().write_all(line.as_bytes());
    }
}
