//! Liveness probe.

use axum::http::StatusCode;

/// Always `200 ok`. Not recorded as a redirect event.
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
