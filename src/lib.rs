//! smartlink library: device-aware smart-link routing
//!
//! This library classifies the device behind an HTTP request and decides where
//! to send it: a native app via deep link, an app-store listing, a fallback
//! website, or an intermediate bridge page that repeats detection in the
//! browser when the server-side signal is inconclusive. Every decision is
//! recorded as a privacy-preserving [`events::LogEvent`].
//!
//! # Example
//!
//! ```
//! use axum::http::{HeaderMap, HeaderValue};
//! use smartlink::{detect_device, resolve_target, Config, TargetType};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("sec-ch-ua-platform", HeaderValue::from_static("\"Android\""));
//!
//! let detection = detect_device(&headers);
//! let target = resolve_target(&detection, &Config::default());
//! assert_eq!(target, TargetType::AndroidStore);
//! ```
//!
//! # Requirements
//!
//! The pure routing functions have no runtime requirements. Serving requests
//! with [`start_server`] requires a Tokio runtime.

#![warn(missing_docs)]

pub mod client_flow;
pub mod config;
pub mod device;
mod error_handling;
pub mod events;
pub mod initialization;
pub mod render;
pub mod server;
pub mod target;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use device::{detect_device, needs_bridge_page, Confidence, DeviceDetectionResult, DeviceType};
pub use error_handling::{ConfigValidationError, InitializationError};
pub use server::{build_router, start_server, AppState};
pub use target::{resolve_target, TargetType};
