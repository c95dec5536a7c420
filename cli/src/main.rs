//! CLI entrypoint for logbridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use commands::Cli;
use logbridge_domain::ThrownError;
use logbridge_infrastructure::{ConfigLoader, TracingCrashSink, build_logger};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // === Dependency Injection ===
    let logger = build_logger(&config, Arc::new(TracingCrashSink))?;

    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --show-config to inspect configuration."),
    };

    let error = cli.error.map(|name| {
        Arc::new(
            ThrownError::new(name)
                .with_message(cli.error_message.unwrap_or_default())
                .with_return_addresses(cli.addresses),
        )
    });

    info!(
        "Logging {} event through {} writer(s)",
        cli.severity,
        logger.writer_count()
    );
    logger.log(cli.severity, message, cli.tag.as_deref(), error)?;

    Ok(())
}
