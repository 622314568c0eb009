//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use crate::events::REDIRECT_EVENT_TARGET;
use colored::*;
use log::LevelFilter;
use serde_json::{json, Value};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// Redirect events are logged on the `redirect_event` target as one JSON
/// object per line. In JSON format that object becomes the `msg` field
/// instead of being quoted as a string.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug smartlink
///
/// # Silence redirect events but keep everything else
/// RUST_LOG=redirect_event=off smartlink
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("tower", LevelFilter::Info);
    builder.filter_module("axum::rejection", LevelFilter::Warn);
    builder.filter_module("smartlink", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_log_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Builds one JSON log line.
///
/// Messages on the redirect event target that hold a JSON object are embedded
/// as that object; every other message is a JSON string.
fn json_log_line(ts_millis: i64, level: log::Level, target: &str, msg: &str) -> Value {
    let msg = if target == REDIRECT_EVENT_TARGET {
        match serde_json::from_str::<Value>(msg) {
            Ok(object @ Value::Object(_)) => object,
            _ => Value::String(msg.to_string()),
        }
    } else {
        Value::String(msg.to_string())
    };

    json!({
        "ts": ts_millis,
        "level": level.to_string(),
        "target": target,
        "msg": msg,
    })
}
