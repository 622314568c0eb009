//! Target resolution.
//!
//! The single decision table mapping a detection result and the routing
//! configuration to a destination kind. Both the redirect handler and the
//! debug endpoint call [`resolve_target`], so they can never disagree.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::config::Config;
use crate::device::{needs_bridge_page, DeviceDetectionResult, DeviceType};

/// Where a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TargetType {
    /// 302 to the Android store listing
    AndroidStore,
    /// 302 to the iOS store listing
    IosStore,
    /// 302 to the fallback website
    Fallback,
    /// Client-side detection page
    Bridge,
    /// Deep link attempt with store fallback
    DeepLink,
}

/// Resolves the target for a detection result.
///
/// Weak detections go to the bridge page before any platform branching.
/// Otherwise Android and iOS prefer a configured deep link over their store,
/// and everything else goes to the fallback website.
pub fn resolve_target(detection: &DeviceDetectionResult, config: &Config) -> TargetType {
    if needs_bridge_page(detection) {
        return TargetType::Bridge;
    }

    match detection.device {
        DeviceType::Android => {
            if config.android_deep_link.is_some() {
                TargetType::DeepLink
            } else {
                TargetType::AndroidStore
            }
        }
        DeviceType::Ios => {
            if config.ios_deep_link.is_some() {
                TargetType::DeepLink
            } else {
                TargetType::IosStore
            }
        }
        DeviceType::Desktop | DeviceType::Unknown => TargetType::Fallback,
    }
}
