//! HTTP header name and value constants.
//!
//! Request headers consumed by device detection and event logging, plus the
//! fixed response header set for redirects and rendered pages.

// Request headers
/// User-Agent request header
pub const HEADER_USER_AGENT: &str = "user-agent";
/// Client Hints platform header (e.g. `"Android"`)
pub const HEADER_SEC_CH_UA_PLATFORM: &str = "sec-ch-ua-platform";
/// Client Hints mobile flag (reported by the debug endpoint only)
pub const HEADER_SEC_CH_UA_MOBILE: &str = "sec-ch-ua-mobile";
/// Proxy-supplied client address list
pub const HEADER_X_FORWARDED_FOR: &str = "x-forwarded-for";
/// Proxy-supplied single client address
pub const HEADER_X_REAL_IP: &str = "x-real-ip";
/// Referer request header
pub const HEADER_REFERER: &str = "referer";

// Response headers
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// Pragma header
pub const HEADER_PRAGMA: &str = "pragma";

// Response header values
/// Content type of rendered pages
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
/// Content type of the debug endpoint
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Responses are never cached
pub const NO_STORE_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate";
/// HTTP/1.0 cache directive
pub const NO_CACHE_PRAGMA: &str = "no-cache";
/// Referrer policy for pages and redirects
pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";
/// Pages only run their own inline script and styles and never connect anywhere
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; script-src 'unsafe-inline'; \
    style-src 'unsafe-inline'; img-src 'self' data:; connect-src 'none'; frame-ancestors 'none'";
/// Disables MIME sniffing
pub const NOSNIFF: &str = "nosniff";
/// Pages may not be framed
pub const FRAME_OPTIONS_DENY: &str = "DENY";

/// Header set attached to every rendered page (bridge and deep-link).
pub const PAGE_HEADERS: &[(&str, &str)] = &[
    ("content-type", HTML_CONTENT_TYPE),
    ("cache-control", NO_STORE_CACHE_CONTROL),
    (HEADER_PRAGMA, NO_CACHE_PRAGMA),
    (HEADER_REFERRER_POLICY, REFERRER_POLICY),
    (HEADER_CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
    (HEADER_X_CONTENT_TYPE_OPTIONS, NOSNIFF),
    (HEADER_X_FRAME_OPTIONS, FRAME_OPTIONS_DENY),
];

/// Header set attached to every 302 redirect (besides `Location`).
pub const REDIRECT_HEADERS: &[(&str, &str)] = &[
    ("cache-control", NO_STORE_CACHE_CONTROL),
    (HEADER_PRAGMA, NO_CACHE_PRAGMA),
    (HEADER_REFERRER_POLICY, REFERRER_POLICY),
];
