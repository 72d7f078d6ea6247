use serde_json::Value;

use crate::logger::Logger;

/// Forwards client events to the `tracing` ecosystem at info level.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str, data: Option<&Value>) {
        match data {
            Some(data) => tracing::info!(%data, "{}", message),
            None => tracing::info!("{}", message),
        }
    }
}
