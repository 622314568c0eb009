//! Response builders with the fixed security header sets.

use axum::{
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::{PAGE_HEADERS, REDIRECT_HEADERS};

/// 302 redirect with no-store caching and a strict referrer policy.
///
/// A location that is not a valid header value (only possible through a
/// misconfigured URL) yields a 500 instead of a panic.
pub fn redirect_response(location: &str) -> Response {
    let location_value = match HeaderValue::from_str(location) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Cannot redirect to {:?}: {}", location, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect target").into_response();
        }
    };

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(LOCATION, location_value);
    with_static_headers(response, REDIRECT_HEADERS)
}

/// 200 HTML page with the full security header set.
pub fn page_response(html: String) -> Response {
    with_static_headers((StatusCode::OK, html).into_response(), PAGE_HEADERS)
}

fn with_static_headers(mut response: Response, headers: &[(&'static str, &'static str)]) -> Response {
    let map = response.headers_mut();
    for (name, value) in headers {
        map.insert(*name, HeaderValue::from_static(*value));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_response_headers() {
        let response = redirect_response("https://example.com/app?ref=x&utm=foo");
        assert_eq!(response.status(), StatusCode::FOUND);
        let headers = response.headers();
        assert_eq!(headers["location"], "https://example.com/app?ref=x&utm=foo");
        assert_eq!(headers["cache-control"], "no-store, no-cache, must-revalidate");
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
        assert!(headers.get("content-security-policy").is_none());
    }

    #[test]
    fn test_redirect_response_rejects_invalid_location() {
        let response = redirect_response("https://example.com/\nInjected: yes");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get("location").is_none());
        assert!(response.headers().get("injected").is_none());
    }

    #[test]
    fn test_page_response_headers() {
        let response = page_response("<!DOCTYPE html>".to_string());
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
        assert_eq!(headers["cache-control"], "no-store, no-cache, must-revalidate");
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
        let csp = headers["content-security-policy"].to_str().unwrap();
        assert!(csp.contains("connect-src 'none'"));
        assert!(csp.contains("frame-ancestors 'none'"));
        assert_eq!(headers.get_all("content-type").iter().count(), 1);
    }
}
