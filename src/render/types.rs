//! Render option types.
//!
//! Request-scoped values derived from the configuration and the incoming query
//! string, consumed once by the page renderers.

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// A platform with a native app and a store listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppPlatform {
    /// Google Play
    Android,
    /// App Store
    Ios,
}

impl AppPlatform {
    /// Short store name used in status messages.
    pub fn store_name(self) -> &'static str {
        match self {
            AppPlatform::Android => "Google Play",
            AppPlatform::Ios => "App Store",
        }
    }

    /// Call-to-action label for the store button.
    pub fn store_label(self) -> &'static str {
        match self {
            AppPlatform::Android => "Get it on Google Play",
            AppPlatform::Ios => "Download on App Store",
        }
    }
}

/// Inputs for the bridge page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgePageOptions {
    /// Android store listing
    pub android_store_url: String,
    /// iOS store listing
    pub ios_store_url: String,
    /// Website for desktop and unknown devices
    pub fallback_url: String,
    /// Raw incoming query string (without `?`), forwarded to the fallback URL
    pub query_string: String,
}

/// Inputs for the deep-link page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkPageOptions {
    /// App URL to try first
    pub deep_link: String,
    /// Store listing used when the app does not open
    pub store_url: String,
    /// Platform the deep link targets
    pub device: AppPlatform,
    /// Raw incoming query string (without `?`), forwarded to the deep link
    pub query_string: String,
}

/// Status text shown once the app is known to have opened.
pub const APP_OPENED_MESSAGE: &str = "App opened successfully!";

/// Status text shown before the store redirect when the app did not open.
pub fn not_installed_message(platform: AppPlatform) -> String {
    format!(
        "App not installed. Redirecting to {}...",
        platform.store_name()
    )
}
