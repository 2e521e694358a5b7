//! Entry point for the document chat viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI with the document location and optional chat id.

mod app;
mod config;

use crate::app::{Launch, run_app};
use crate::config::{load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: docchat <document-path-or-url> [document-id]";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let launch = parse_args(env::args().skip(1))?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    if let Ok(effective) = serialize_config(&config) {
        debug!("Effective configuration:\n{effective}");
    }
    info!(
        document = %launch.document,
        document_id = launch.document_id.as_deref().unwrap_or("-"),
        backend = %config.backend_url,
        theme = %config.theme,
        level = %config.log_level,
        "Starting document viewer"
    );
    run_app(launch, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Launch> {
    let document = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let document_id = args
        .next()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());
    if args.next().is_some() {
        return Err(anyhow!(USAGE));
    }
    Ok(Launch {
        document,
        document_id,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
