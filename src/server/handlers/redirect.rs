//! Smart-link redirect handler.

use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Response,
};

use super::super::response::{page_response, redirect_response};
use super::super::types::AppState;
use crate::config::Config;
use crate::device::{detect_device, DeviceDetectionResult, DeviceType};
use crate::events::{build_log_event, EventSink, LogEvent};
use crate::render::{
    append_query_string, render_bridge_page, render_deep_link_page, AppPlatform,
    BridgePageOptions, DeepLinkPageOptions,
};
use crate::target::{resolve_target, TargetType};

/// Detects the device, picks a target, records the decision and responds.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let query = uri.query().unwrap_or("");
    let detection = detect_device(&headers);
    let target = resolve_target(&detection, &state.config);

    log::debug!(
        "{} -> {} ({}, {} confidence: {})",
        uri.path(),
        target,
        detection.device,
        detection.confidence,
        detection.reason
    );

    let event = build_log_event(uri.path(), query, &headers, detection.device, target);
    emit_event(state.sink.as_ref(), &event);

    respond(target, &detection, &state.config, query)
}

/// Hands the event to the sink. A failing sink never affects the response.
fn emit_event(sink: &dyn EventSink, event: &LogEvent) {
    if catch_unwind(AssertUnwindSafe(|| sink.emit(event))).is_err() {
        log::error!("Redirect event sink panicked; event dropped");
    }
}

fn respond(
    target: TargetType,
    detection: &DeviceDetectionResult,
    config: &Config,
    query: &str,
) -> Response {
    match target {
        TargetType::Bridge => page_response(render_bridge_page(&BridgePageOptions {
            android_store_url: config.android_store_url.clone(),
            ios_store_url: config.ios_store_url.clone(),
            fallback_url: config.fallback_url.clone(),
            query_string: query.to_string(),
        })),
        TargetType::DeepLink => match deep_link_options(detection.device, config, query) {
            Some(options) => page_response(render_deep_link_page(&options)),
            // resolve_target only picks DeepLink when the platform has one configured
            None => redirect_response(&append_query_string(&config.fallback_url, query)),
        },
        TargetType::AndroidStore => redirect_response(&config.android_store_url),
        TargetType::IosStore => redirect_response(&config.ios_store_url),
        TargetType::Fallback => {
            redirect_response(&append_query_string(&config.fallback_url, query))
        }
    }
}

fn deep_link_options(
    device: DeviceType,
    config: &Config,
    query: &str,
) -> Option<DeepLinkPageOptions> {
    let (platform, deep_link, store_url) = match device {
        DeviceType::Android => (
            AppPlatform::Android,
            config.android_deep_link.as_ref()?,
            &config.android_store_url,
        ),
        DeviceType::Ios => (
            AppPlatform::Ios,
            config.ios_deep_link.as_ref()?,
            &config.ios_store_url,
        ),
        DeviceType::Desktop | DeviceType::Unknown => return None,
    };

    Some(DeepLinkPageOptions {
        deep_link: deep_link.clone(),
        store_url: store_url.clone(),
        device: platform,
        query_string: query.to_string(),
    })
}
