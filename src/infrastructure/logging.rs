//! File-based tracing setup.
//!
//! The dashboard owns the terminal, so events go to
//! `<log_dir>/keeper.log.<date>` with daily rotation instead of stderr.
//! Filtering follows `KEEPER_LOG` (EnvFilter syntax), default `info`:
//! - `KEEPER_LOG=debug` - every transition and store access
//! - `KEEPER_LOG=keeper::application=debug` - navigation only

use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::Config;

pub const LOG_FILE: &str = "keeper.log";

pub fn init(config: &Config) {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!(
            "Warning: Could not initialize file logging in {}: {}",
            config.log_dir.display(),
            e
        );
        return;
    }

    let filter = EnvFilter::try_from_env("KEEPER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    if tracing_subscriber::registry()
        .with(file_layer.with_filter(filter))
        .try_init()
        .is_err()
    {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}
