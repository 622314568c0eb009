//! Application configuration and constants.
//!
//! This module provides:
//! - Link defaults and client timing constants
//! - HTTP header name and value constants
//! - The routing `Config` value, its environment loader and the CLI options

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
