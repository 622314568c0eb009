//! Configuration types and CLI options.
//!
//! This module defines the routing configuration consumed by the request
//! handlers, the environment loader that fills it, and the enums used for
//! command-line argument parsing.

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::constants::{
    DEBUG_ENABLED_VALUE, DEFAULT_ANDROID_STORE_URL, DEFAULT_FALLBACK_URL, DEFAULT_HOST,
    DEFAULT_IOS_STORE_URL, DEFAULT_PORT, ENV_ANDROID_DEEP_LINK, ENV_ANDROID_STORE_URL, ENV_DEBUG,
    ENV_FALLBACK_URL, ENV_IOS_DEEP_LINK, ENV_IOS_STORE_URL,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the `smartlink` binary.
///
/// Only server and logging settings live here. Link settings come from the
/// environment (see [`Config::from_env`]).
#[derive(Debug, Clone, Parser)]
#[command(name = "smartlink", version, about)]
pub struct Opt {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Socket address string (`host:port`) to bind the server to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Routing configuration.
///
/// A plain immutable value handed to the request handlers. The routing core
/// never reads the environment itself and never invents defaults; defaults
/// are applied here, by the loader.
///
/// # Examples
///
/// ```
/// use smartlink::Config;
///
/// let config = Config {
///     android_deep_link: Some("myapp://open".to_string()),
///     ..Default::default()
/// };
/// assert!(config.ios_deep_link.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Google Play listing
    pub android_store_url: String,

    /// App Store listing
    pub ios_store_url: String,

    /// Website for desktop and undetected visitors
    pub fallback_url: String,

    /// Android deep link (serialized as `null` when unset)
    pub android_deep_link: Option<String>,

    /// iOS deep link (serialized as `null` when unset)
    pub ios_deep_link: Option<String>,

    /// Enables the debug endpoint
    #[serde(skip)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            android_store_url: DEFAULT_ANDROID_STORE_URL.to_string(),
            ios_store_url: DEFAULT_IOS_STORE_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            android_deep_link: None,
            ios_deep_link: None,
            debug: false,
        }
    }
}

impl Config {
    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. Debug mode is enabled only when
    /// `DEBUG` is exactly `"true"`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            android_store_url: get(ENV_ANDROID_STORE_URL)
                .unwrap_or_else(|| DEFAULT_ANDROID_STORE_URL.to_string()),
            ios_store_url: get(ENV_IOS_STORE_URL)
                .unwrap_or_else(|| DEFAULT_IOS_STORE_URL.to_string()),
            fallback_url: get(ENV_FALLBACK_URL).unwrap_or_else(|| DEFAULT_FALLBACK_URL.to_string()),
            android_deep_link: get(ENV_ANDROID_DEEP_LINK),
            ios_deep_link: get(ENV_IOS_DEEP_LINK),
            debug: get(ENV_DEBUG).as_deref() == Some(DEBUG_ENABLED_VALUE),
        }
    }

    /// Builds a configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validates that every configured link is usable.
    ///
    /// Store URLs and deep links may use any scheme (`market://details?id=..`,
    /// `itms-apps://..`, `myapp://open`) but must parse as URLs. The fallback
    /// URL must be an absolute `http`/`https` URL.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        validate_link("android_store_url", &self.android_store_url)?;
        validate_link("ios_store_url", &self.ios_store_url)?;
        validate_web_url("fallback_url", &self.fallback_url)?;
        if let Some(link) = &self.android_deep_link {
            validate_link("android_deep_link", link)?;
        }
        if let Some(link) = &self.ios_deep_link {
            validate_link("ios_deep_link", link)?;
        }
        Ok(())
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<url::Url, ConfigValidationError> {
    url::Url::parse(value).map_err(|e| {
        ConfigValidationError::new(field, format!("'{}' is not a valid URL: {}", value, e))
    })
}

fn validate_web_url(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    match parse_url(field, value)?.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigValidationError::new(
            field,
            format!("'{}' must use http or https, not '{}'", value, other),
        )),
    }
}

fn validate_link(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    parse_url(field, value).map(|_| ())
}
