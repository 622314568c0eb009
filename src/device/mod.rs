//! Device classification from request headers.
//!
//! Client Hints are consulted first because they are structured and harder to
//! spoof by accident; the User-Agent string is the fallback. Detection is total:
//! missing or malformed headers yield an `unknown` device with low confidence.

mod types;
mod user_agent;

use axum::http::HeaderMap;

use crate::config::{HEADER_SEC_CH_UA_PLATFORM, HEADER_USER_AGENT};
pub use types::{Confidence, DeviceDetectionResult, DeviceType};
use user_agent::{detect_from_user_agent, is_probably_ipad};

/// Detects the device type from request headers.
///
/// # Arguments
///
/// * `headers` - Incoming request headers
///
/// # Returns
///
/// A fresh `DeviceDetectionResult`. Never fails.
pub fn detect_device(headers: &HeaderMap) -> DeviceDetectionResult {
    if let Some(platform) = header_value(headers, HEADER_SEC_CH_UA_PLATFORM) {
        if let Some(result) = detect_from_platform_hint(&platform, headers) {
            return result;
        }
    }

    match header_value(headers, HEADER_USER_AGENT) {
        Some(ua) => detect_from_user_agent(&ua),
        None => DeviceDetectionResult::new(
            DeviceType::Unknown,
            Confidence::Low,
            "No User-Agent header present",
        ),
    }
}

/// Whether the detection is too weak to route on without a client-side check.
///
/// True exactly when confidence is low or the device is unknown.
pub fn needs_bridge_page(result: &DeviceDetectionResult) -> bool {
    result.confidence == Confidence::Low || result.device == DeviceType::Unknown
}

/// Maps a `Sec-CH-UA-Platform` value to a result, or `None` for unrecognized values.
fn detect_from_platform_hint(platform: &str, headers: &HeaderMap) -> Option<DeviceDetectionResult> {
    let normalized = platform.to_lowercase().replace('"', "");

    let result = match normalized.as_str() {
        "android" => DeviceDetectionResult::new(
            DeviceType::Android,
            Confidence::High,
            "Client Hints: Sec-CH-UA-Platform = Android",
        ),
        "ios" => DeviceDetectionResult::new(
            DeviceType::Ios,
            Confidence::High,
            "Client Hints: Sec-CH-UA-Platform = iOS",
        ),
        // An iPad requesting the desktop site reports macOS
        "macos" => {
            let ua = header_value(headers, HEADER_USER_AGENT).unwrap_or_default();
            if is_probably_ipad(&ua) {
                DeviceDetectionResult::new(
                    DeviceType::Ios,
                    Confidence::Low,
                    "Client Hints: macOS but UA suggests iPad",
                )
            } else {
                DeviceDetectionResult::new(
                    DeviceType::Desktop,
                    Confidence::High,
                    "Client Hints: Sec-CH-UA-Platform = macOS",
                )
            }
        }
        "windows" | "linux" | "chromeos" => DeviceDetectionResult::new(
            DeviceType::Desktop,
            Confidence::High,
            format!("Client Hints: Sec-CH-UA-Platform = {}", platform),
        ),
        _ => return None,
    };

    Some(result)
}

/// Returns a header as text, or `None` when absent or empty.
///
/// Non-UTF-8 bytes are replaced rather than rejected so an odd User-Agent
/// still gets classified.
pub(crate) fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
