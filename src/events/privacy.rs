//! Privacy-preserving field extraction for redirect events.

use axum::http::HeaderMap;

use crate::config::{
    HEADER_X_FORWARDED_FOR, HEADER_X_REAL_IP, MAX_LOGGED_USER_AGENT_CHARS, UNKNOWN_IP_HASH,
};
use crate::device::header_value;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Hashes an IP address for privacy-safe logging.
///
/// 32-bit FNV-1a over the UTF-16 code units, as 8 lower-case hex digits.
/// An empty input yields `unknown`.
///
/// # Examples
///
/// ```
/// use smartlink::events::hash_ip;
///
/// assert_eq!(hash_ip(""), "unknown");
/// assert_eq!(hash_ip("203.0.113.7"), hash_ip("203.0.113.7"));
/// assert_eq!(hash_ip("203.0.113.7").len(), 8);
/// ```
pub fn hash_ip(ip: &str) -> String {
    if ip.is_empty() {
        return UNKNOWN_IP_HASH.to_string();
    }

    let hash = ip.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });
    format!("{:08x}", hash)
}

/// Truncates a User-Agent to `MAX_LOGGED_USER_AGENT_CHARS` characters plus `...`.
pub fn truncate_user_agent(ua: &str) -> String {
    match ua.char_indices().nth(MAX_LOGGED_USER_AGENT_CHARS) {
        Some((cut, _)) => format!("{}...", &ua[..cut]),
        None => ua.to_string(),
    }
}

/// Extracts the decoded parameter names of a raw query string, in order.
pub fn query_keys(query: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, _)| key.into_owned())
        .collect()
}

/// Determines the client IP from proxy headers.
///
/// Uses the first entry of `x-forwarded-for`, then `x-real-ip`. Returns an
/// empty string when neither is usable.
pub fn client_ip(headers: &HeaderMap) -> String {
    header_value(headers, HEADER_X_FORWARDED_FOR)
        .and_then(|list| {
            list.split(',')
                .next()
                .map(str::trim)
                .filter(|first| !first.is_empty())
                .map(str::to_string)
        })
        .or_else(|| header_value(headers, HEADER_X_REAL_IP))
        .unwrap_or_default()
}
