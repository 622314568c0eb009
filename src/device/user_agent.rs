//! User-Agent pattern matching.
//!
//! Ordered substring checks, first match wins. All comparisons are
//! case-insensitive.

use super::types::{Confidence, DeviceDetectionResult, DeviceType};

/// Classifies a non-empty User-Agent string.
pub(crate) fn detect_from_user_agent(ua: &str) -> DeviceDetectionResult {
    let lower = ua.to_lowercase();

    if lower.contains("android") {
        return DeviceDetectionResult::new(
            DeviceType::Android,
            Confidence::High,
            "User-Agent contains \"Android\"",
        );
    }

    if lower.contains("iphone") {
        return DeviceDetectionResult::new(
            DeviceType::Ios,
            Confidence::High,
            "User-Agent contains \"iPhone\"",
        );
    }

    if lower.contains("ipod") {
        return DeviceDetectionResult::new(
            DeviceType::Ios,
            Confidence::High,
            "User-Agent contains \"iPod\"",
        );
    }

    if lower.contains("ipad") {
        return DeviceDetectionResult::new(
            DeviceType::Ios,
            Confidence::High,
            "User-Agent contains \"iPad\"",
        );
    }

    // Unreachable in practice: any UA the heuristic accepts already matched "ipad" above
    if is_mac(&lower) && is_probably_ipad(&lower) {
        return DeviceDetectionResult::new(
            DeviceType::Ios,
            Confidence::Low,
            "User-Agent contains \"Macintosh\" but might be iPad (iPadOS 13+)",
        );
    }

    if lower.contains("windows nt") {
        return DeviceDetectionResult::new(
            DeviceType::Desktop,
            Confidence::High,
            "User-Agent indicates Windows",
        );
    }

    if is_mac(&lower) {
        return DeviceDetectionResult::new(
            DeviceType::Desktop,
            Confidence::High,
            "User-Agent indicates macOS",
        );
    }

    if lower.contains("linux") && !lower.contains("android") {
        return DeviceDetectionResult::new(
            DeviceType::Desktop,
            Confidence::High,
            "User-Agent indicates Linux desktop",
        );
    }

    if lower.contains("cros") {
        return DeviceDetectionResult::new(
            DeviceType::Desktop,
            Confidence::High,
            "User-Agent indicates Chrome OS",
        );
    }

    if lower.contains("mobile") || lower.contains("phone") {
        return DeviceDetectionResult::new(
            DeviceType::Unknown,
            Confidence::Low,
            "User-Agent indicates mobile but platform unclear",
        );
    }

    DeviceDetectionResult::new(
        DeviceType::Unknown,
        Confidence::Low,
        "Could not determine device from User-Agent",
    )
}

/// iPad-masquerade heuristic.
///
/// Only a literal "ipad" substring counts. iPadOS 13+ Safari sends a plain
/// Macintosh User-Agent and is therefore classified as desktop here; the
/// bridge page's touch-point check is the only place that can tell them apart.
pub(crate) fn is_probably_ipad(ua: &str) -> bool {
    ua.to_lowercase().contains("ipad")
}

fn is_mac(lower: &str) -> bool {
    lower.contains("macintosh") || lower.contains("mac os x")
}
