//! Configuration constants.
//!
//! This module defines the documented link defaults, logging limits and the
//! client-side timing values shared by the rendered pages and their Rust models.

// Link defaults (applied by the loader when a variable is unset or empty)
/// Google Play listing used when `ANDROID_STORE_URL` is not set
pub const DEFAULT_ANDROID_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.example.app";
/// App Store listing used when `IOS_STORE_URL` is not set
pub const DEFAULT_IOS_STORE_URL: &str = "https://apps.apple.com/app/id123456789";
/// Website used for desktop visitors when `FALLBACK_URL` is not set
pub const DEFAULT_FALLBACK_URL: &str = "https://example.com/app";

// Environment variable names read by `Config::from_env`
/// Android store listing URL
pub const ENV_ANDROID_STORE_URL: &str = "ANDROID_STORE_URL";
/// iOS store listing URL
pub const ENV_IOS_STORE_URL: &str = "IOS_STORE_URL";
/// Fallback website URL
pub const ENV_FALLBACK_URL: &str = "FALLBACK_URL";
/// Optional Android deep link
pub const ENV_ANDROID_DEEP_LINK: &str = "ANDROID_DEEP_LINK";
/// Optional iOS deep link
pub const ENV_IOS_DEEP_LINK: &str = "IOS_DEEP_LINK";
/// Enables the debug endpoint
pub const ENV_DEBUG: &str = "DEBUG";

/// The only `DEBUG` value that enables debug mode
pub const DEBUG_ENABLED_VALUE: &str = "true";

// Server defaults
/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

// Event log limits
/// Maximum User-Agent length (in characters) recorded in a redirect event.
/// Longer values are cut and suffixed with `...`
pub const MAX_LOGGED_USER_AGENT_CHARS: usize = 200;
/// Hash value recorded when no client IP could be determined
pub const UNKNOWN_IP_HASH: &str = "unknown";

// Client-side timing (milliseconds)
/// Bridge page: delay before auto-navigation so the page can paint
pub const BRIDGE_REDIRECT_DELAY_MS: u64 = 300;
/// Deep-link page: delay before checking whether the app opened
pub const DEEP_LINK_CHECK_DELAY_MS: u64 = 800;
/// Deep-link page: a checkpoint later than this is inconclusive and does nothing
pub const DEEP_LINK_OPEN_WINDOW_MS: u64 = 2000;
/// Deep-link page: delay between "app not installed" and the store redirect
pub const STORE_REDIRECT_DELAY_MS: u64 = 500;
