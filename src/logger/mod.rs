//! Logging seam. The client emits one event before issuing a request and
//! one after a successful response; where the events go is up to the
//! injected [`Logger`].

use serde_json::Value;

#[cfg(test)]
mod tests;

pub mod print;
pub mod tracing;

/// A sink for client events. Implementations must not fail: logging is
/// best effort and never interrupts a call.
pub trait Logger {
    fn log(&self, message: &str, data: Option<&Value>);
}

/// The default sink. Stands in for an absent logger so callers never have
/// to check for one.
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _message: &str, _data: Option<&Value>) {}
}
