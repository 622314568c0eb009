//! Redirect event logging.
//!
//! Every routing decision produces one [`LogEvent`] handed to an
//! [`EventSink`]. The event never contains the raw client IP or query values.

mod privacy;
mod sink;
mod types;

use axum::http::HeaderMap;
use chrono::{SecondsFormat, Utc};

use crate::config::{HEADER_REFERER, HEADER_USER_AGENT};
use crate::device::{header_value, DeviceType};
use crate::target::TargetType;
pub use privacy::{client_ip, hash_ip, query_keys, truncate_user_agent};
pub use sink::{EventSink, LogSink, REDIRECT_EVENT_TARGET};
pub use types::LogEvent;

/// Builds the event for one routing decision.
///
/// # Arguments
///
/// * `path` - Request path
/// * `query` - Raw query string (without `?`)
/// * `headers` - Request headers
/// * `device` - Detected device
/// * `target` - Chosen target
pub fn build_log_event(
    path: &str,
    query: &str,
    headers: &HeaderMap,
    device: DeviceType,
    target: TargetType,
) -> LogEvent {
    LogEvent {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        path: path.to_string(),
        detected_device: device,
        chosen_target: target,
        user_agent: truncate_user_agent(
            &header_value(headers, HEADER_USER_AGENT).unwrap_or_default(),
        ),
        referrer: header_value(headers, HEADER_REFERER).unwrap_or_default(),
        query_keys: query_keys(query),
        ip_hash: hash_ip(&client_ip(headers)),
    }
}
