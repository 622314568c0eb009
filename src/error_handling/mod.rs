//! Error handling.
//!
//! This module provides the error types for the fallible edges of the service:
//! - **Initialization**: logger setup and listener binding
//! - **Configuration**: link values that fail validation at startup
//!
//! Device detection, target resolution and page rendering are total and never
//! produce errors; malformed input degrades to an `unknown` device instead.

mod types;

// Re-export public API
pub use types::{ConfigValidationError, InitializationError};
