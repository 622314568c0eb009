//! Application initialization.
//!
//! This module provides the one-time process setup performed by the binary
//! before the server starts accepting requests.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
