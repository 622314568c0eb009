//! Client-side device re-detection.

/// Signals available to the bridge page script in the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSignals {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// `navigator.platform`
    pub platform: String,
    /// `navigator.maxTouchPoints`
    pub max_touch_points: u32,
}

/// Device as seen by the bridge page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientDevice {
    /// Android phone or tablet
    Android,
    /// iPhone, iPod or iPad
    Ios,
    /// Any other browser
    Desktop,
    /// No usable signal
    Unknown,
}

/// Classifies the browser the way the bridge page script does.
///
/// Unlike server-side detection, touch capability separates iPadOS 13+
/// (Macintosh User-Agent, several touch points) from a real Mac.
pub fn detect_client_device(signals: &ClientSignals) -> ClientDevice {
    let ua = signals.user_agent.to_lowercase();
    let platform = signals.platform.to_lowercase();
    let touch = signals.max_touch_points;

    let contains_any = |haystack: &str, needles: &[&str]| needles.iter().any(|n| haystack.contains(n));

    if ua.contains("android") {
        ClientDevice::Android
    } else if contains_any(&ua, &["iphone", "ipad", "ipod"]) {
        ClientDevice::Ios
    } else if ua.contains("macintosh") && touch > 1 {
        ClientDevice::Ios
    } else if contains_any(&platform, &["iphone", "ipad", "ipod"]) {
        ClientDevice::Ios
    } else if contains_any(&platform, &["win", "mac", "linux"]) && touch <= 1 {
        ClientDevice::Desktop
    } else {
        ClientDevice::Unknown
    }
}
