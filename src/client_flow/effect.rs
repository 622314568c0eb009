//! Side effects requested by the client flow models.

/// Timers a flow can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Bridge page auto-navigation
    BridgeRedirect,
    /// Deep-link page "did the app open?" checkpoint
    DeepLinkCheck,
    /// Deep-link page store navigation after "not installed"
    StoreRedirect,
}

/// What the page does in response to a transition.
///
/// Navigation is fire-and-forget: once a `Navigate` is emitted nothing can
/// cancel it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the page location
    Navigate(String),
    /// Hide the element with this id
    HideElement(&'static str),
    /// Show a status message
    SetStatus(String),
    /// Start a timer
    Schedule {
        /// Timer to fire
        timer: Timer,
        /// Delay before it fires
        delay_ms: u64,
    },
}

// Element ids used by the rendered pages
/// iOS store button
pub const IOS_BUTTON_ID: &str = "ios-btn";
/// Android store button
pub const ANDROID_BUTTON_ID: &str = "android-btn";
/// Loading spinner
pub const SPINNER_ID: &str = "spinner";
