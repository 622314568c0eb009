//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `smartlink` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Configuration loading and validation
//!
//! All routing logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use smartlink::initialization::init_logger_with;
use smartlink::{start_server, AppState, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal in production
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("smartlink error: {}", e);
        process::exit(1);
    }
    log_effective_config(&config);

    if let Err(e) = start_server(&opt.bind_address(), AppState::new(config)).await {
        eprintln!("smartlink error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn log_effective_config(config: &Config) {
    let describe = |link: &Option<String>| match link {
        Some(link) => link.clone(),
        None => "not configured".to_string(),
    };
    log::info!("Android store: {}", config.android_store_url);
    log::info!("iOS store: {}", config.ios_store_url);
    log::info!("Fallback: {}", config.fallback_url);
    log::info!("Android deep link: {}", describe(&config.android_deep_link));
    log::info!("iOS deep link: {}", describe(&config.ios_deep_link));
    log::info!("Debug mode: {}", if config.debug { "on" } else { "off" });
}
