//! Redirect event data structures.

use serde::Serialize;

use crate::device::DeviceType;
use crate::target::TargetType;

/// One routing decision, as recorded in the event log.
///
/// Carries only privacy-safe fields: the client IP appears solely as a one-way
/// hash and the query string solely as its parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Request path
    pub path: String,
    /// Device reported by detection
    pub detected_device: DeviceType,
    /// Where the request was sent
    pub chosen_target: TargetType,
    /// User-Agent, truncated
    pub user_agent: String,
    /// Referer header, empty when absent
    pub referrer: String,
    /// Query parameter names, values discarded
    pub query_keys: Vec<String>,
    /// FNV-1a hash of the client IP, or `unknown`
    pub ip_hash: String,
}

/// Envelope written by [`super::LogSink`].
#[derive(Serialize)]
pub(super) struct LogRecord<'a> {
    pub level: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub event: &'a LogEvent,
}
