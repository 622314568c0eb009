//! Server data structures.

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::device::DeviceDetectionResult;
use crate::events::{EventSink, LogSink};
use crate::target::TargetType;

/// Shared, read-only state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Routing configuration, fixed at startup
    pub config: Arc<Config>,
    /// Destination for redirect events
    pub sink: Arc<dyn EventSink>,
}

impl AppState {
    /// State that logs redirect events through the `log` facade.
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Arc::new(LogSink))
    }

    /// State with a custom event sink.
    pub fn with_sink(config: Config, sink: Arc<dyn EventSink>) -> Self {
        Self {
            config: Arc::new(config),
            sink,
        }
    }
}

/// JSON response for the debug endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse<'a> {
    /// Server-side detection
    pub detection: DeviceDetectionResult,
    /// Whether detection alone is too weak
    pub needs_bridge_page: bool,
    /// Headers that drove detection
    pub headers: DebugHeaders,
    /// Effective configuration
    pub config: &'a Config,
    /// Incoming query string without `?`
    pub query_string: &'a str,
    /// Target the redirect handler would pick
    pub chosen_target: TargetType,
}

/// Request headers echoed by the debug endpoint. The client address is only
/// ever reported as `[redacted]`.
#[derive(Serialize)]
pub struct DebugHeaders {
    /// User-Agent as sent
    #[serde(rename = "User-Agent")]
    pub user_agent: Option<String>,
    /// Platform client hint as sent
    #[serde(rename = "Sec-CH-UA-Platform")]
    pub sec_ch_ua_platform: Option<String>,
    /// Mobile client hint as sent
    #[serde(rename = "Sec-CH-UA-Mobile")]
    pub sec_ch_ua_mobile: Option<String>,
    /// `[redacted]` when the client sent a forwarded address
    #[serde(rename = "x-forwarded-for")]
    pub x_forwarded_for: Option<&'static str>,
}
