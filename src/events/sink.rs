//! Event sinks.

use super::types::{LogEvent, LogRecord};

/// Log target used for redirect events.
pub const REDIRECT_EVENT_TARGET: &str = "redirect_event";

/// Consumer of redirect events.
///
/// `emit` is infallible from the caller's point of view. Implementations must
/// not block and must swallow their own failures; the response never waits on
/// or depends on the sink.
pub trait EventSink: Send + Sync {
    /// Records one event.
    fn emit(&self, event: &LogEvent);
}

/// Writes each event as one JSON line through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Serializes an event as the JSON line this sink logs.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization fails.
    pub fn render(event: &LogEvent) -> serde_json::Result<String> {
        serde_json::to_string(&LogRecord {
            level: "info",
            kind: REDIRECT_EVENT_TARGET,
            event,
        })
    }
}

impl EventSink for LogSink {
    fn emit(&self, event: &LogEvent) {
        match Self::render(event) {
            Ok(line) => log::info!(target: REDIRECT_EVENT_TARGET, "{}", line),
            Err(e) => log::warn!("Failed to serialize redirect event: {}", e),
        }
    }
}
