//! Debug introspection handler.

use axum::{
    extract::State,
    http::{header::CACHE_CONTROL, header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::super::types::{AppState, DebugHeaders, DebugResponse};
use crate::config::{
    HEADER_SEC_CH_UA_MOBILE, HEADER_SEC_CH_UA_PLATFORM, HEADER_USER_AGENT, HEADER_X_FORWARDED_FOR,
    JSON_CONTENT_TYPE,
};
use crate::device::{detect_device, header_value, needs_bridge_page};
use crate::target::resolve_target;

/// Shows how the current request would be routed, without routing it.
///
/// Returns 404 unless debug mode is enabled. Uses the same detection and
/// resolution functions as the redirect handler and records no event.
pub async fn debug_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if !state.config.debug {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    let detection = detect_device(&headers);
    let response = DebugResponse {
        needs_bridge_page: needs_bridge_page(&detection),
        chosen_target: resolve_target(&detection, &state.config),
        headers: DebugHeaders {
            user_agent: echo_header(&headers, HEADER_USER_AGENT),
            sec_ch_ua_platform: echo_header(&headers, HEADER_SEC_CH_UA_PLATFORM),
            sec_ch_ua_mobile: echo_header(&headers, HEADER_SEC_CH_UA_MOBILE),
            x_forwarded_for: header_value(&headers, HEADER_X_FORWARDED_FOR).map(|_| "[redacted]"),
        },
        config: &state.config,
        query_string: uri.query().unwrap_or(""),
        detection,
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize debug info: {}", e),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        [(CONTENT_TYPE, JSON_CONTENT_TYPE), (CACHE_CONTROL, "no-store")],
        json,
    )
        .into_response()
}

/// Header as sent, empty values included.
fn echo_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::http::HeaderValue;

    async fn debug_json(headers: HeaderMap) -> serde_json::Value {
        let state = AppState::new(Config {
            debug: true,
            ..Default::default()
        });
        let response = debug_handler(State(state), Uri::from_static("/api/debug"), headers).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_empty_headers_are_echoed_as_empty_strings() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_USER_AGENT, HeaderValue::from_static(""));
        headers.insert(HEADER_SEC_CH_UA_MOBILE, HeaderValue::from_static(""));
        headers.insert(HEADER_X_FORWARDED_FOR, HeaderValue::from_static(""));

        let json = debug_json(headers).await;
        assert_eq!(json["headers"]["User-Agent"], "");
        assert_eq!(json["headers"]["Sec-CH-UA-Mobile"], "");
        assert!(json["headers"]["Sec-CH-UA-Platform"].is_null());
        // An empty forwarded-for counts as absent
        assert!(json["headers"]["x-forwarded-for"].is_null());
    }

    #[tokio::test]
    async fn test_forwarded_for_is_redacted() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));

        let json = debug_json(headers).await;
        assert_eq!(json["headers"]["x-forwarded-for"], "[redacted]");
        assert!(!json.to_string().contains("203.0.113.7"));
    }
}
