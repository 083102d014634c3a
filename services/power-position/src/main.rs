//! Power Position Service
//!
//! Long-running worker that periodically extracts the current trading
//! day's power trades, aggregates per-period volumes into local-hour
//! buckets, and exports a timestamped `PowerPosition` CSV report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use power_connector::{SimulatedPowerService, SimulatorConfig};
use power_position::config::PositionConfig;
use power_position::worker::ExtractionWorker;

// Constants
const SERVICE_NAME: &str = "power-position";
const ENV_INTERVAL_MINUTES: &str = "POWER_POSITION_INTERVAL_MINUTES";
const ENV_OUTPUT_DIR: &str = "POWER_POSITION_OUTPUT_DIR";
const ENV_TIMEZONE: &str = "POWER_POSITION_TIMEZONE";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    info!(
        "Starting Power Position Service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration; malformed configuration is fatal at startup
    let config = load_config()?;
    config.validate().context("Invalid service configuration")?;

    info!(
        "Configuration - Interval: {}min, Output: {}, Timezone: {}",
        config.interval_minutes,
        config.output_dir.display(),
        config.timezone
    );

    let service = SimulatedPowerService::new(SimulatorConfig {
        timezone: config.resolve_timezone()?,
        ..SimulatorConfig::default()
    });
    let worker = ExtractionWorker::new(service, config)?;

    // Create shutdown signal
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {e}");
            return;
        }
        info!("Received Ctrl-C, shutting down");
        let _ = shutdown_tx.send(());
    });

    worker.run(shutdown_rx).await;

    info!("Power Position Service shut down successfully");
    Ok(())
}

/// Initialize tracing with environment filter
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info", SERVICE_NAME.replace('-', "_")).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    Ok(())
}

/// Load configuration from environment and defaults
fn load_config() -> Result<PositionConfig> {
    let defaults = PositionConfig::default();

    let interval_minutes = match std::env::var(ENV_INTERVAL_MINUTES) {
        Ok(val) => val
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("Invalid {ENV_INTERVAL_MINUTES}: {e}"))?,
        Err(_) => defaults.interval_minutes,
    };

    let output_dir = match std::env::var(ENV_OUTPUT_DIR) {
        Ok(val) => PathBuf::from(val),
        Err(_) => defaults.output_dir,
    };

    let timezone = match std::env::var(ENV_TIMEZONE) {
        Ok(val) => val,
        Err(_) => defaults.timezone,
    };

    Ok(PositionConfig {
        interval_minutes,
        output_dir,
        timezone,
    })
}
