//! groupie-web - Groupie Tracker web front end
//!
//! Resolves configuration, sets up logging, then hands over to
//! [`groupie_web::server::run`]. A failed startup load exits non-zero
//! without ever binding the listener.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use groupie_common::config::{resolve_config_path, TomlConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for groupie-web
#[derive(Parser, Debug)]
#[command(name = "groupie-web")]
#[command(about = "Groupie Tracker web front end")]
#[command(version)]
struct Args {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening address, overrides the config file
    #[arg(short, long, env = "GROUPIE_BIND")]
    bind: Option<String>,

    /// Log level, overrides the config file (RUST_LOG takes precedence)
    #[arg(long, env = "GROUPIE_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let mut config =
        TomlConfig::load(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Groupie Tracker (groupie-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &config_path {
        Some(path) if path.exists() => info!("Config: {}", path.display()),
        Some(path) => warn!("Config file {} not found, using compiled defaults", path.display()),
        None => info!("Config: compiled defaults"),
    }

    groupie_web::server::run(config).await
}
