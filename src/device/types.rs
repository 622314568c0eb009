//! Device detection data structures.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Platform family of the requesting device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceType {
    /// Android phone or tablet
    Android,
    /// iPhone, iPod or iPad
    Ios,
    /// Windows, macOS, Linux or ChromeOS
    Desktop,
    /// Not classifiable
    Unknown,
}

/// Whether the server-side signal is reliable enough to act on directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    /// Route directly
    High,
    /// Confirm in the browser first
    Low,
}

/// Outcome of classifying one request.
///
/// Created fresh per request and never persisted. `reason` is a human-readable
/// explanation for logs and the debug endpoint; its wording carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceDetectionResult {
    /// Detected platform
    pub device: DeviceType,
    /// How far the result can be trusted
    pub confidence: Confidence,
    /// Explanation for logs and debugging
    pub reason: String,
}

impl DeviceDetectionResult {
    pub(crate) fn new(device: DeviceType, confidence: Confidence, reason: impl Into<String>) -> Self {
        Self {
            device,
            confidence,
            reason: reason.into(),
        }
    }
}
