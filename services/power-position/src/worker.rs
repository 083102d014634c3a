//! Periodic extraction worker
//!
//! One aggregate-then-export cycle per tick. A cycle runs to completion
//! before the next tick is eligible, so report filenames (minute
//! resolution) cannot collide between overlapping runs. A failed cycle
//! is logged and the loop continues; only shutdown stops it.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use power_connector::PowerService;
use services_common::ServiceError;

use crate::aggregator::PositionAggregator;
use crate::config::PositionConfig;
use crate::report::ReportWriter;

/// Drives the periodic aggregate-then-export cycle
#[derive(Debug)]
pub struct ExtractionWorker<S> {
    aggregator: PositionAggregator<S>,
    writer: ReportWriter,
    config: PositionConfig,
    timezone: Tz,
}

impl<S: PowerService> ExtractionWorker<S> {
    /// Build a worker over the given trade source and validated config
    pub fn new(service: S, config: PositionConfig) -> Result<Self, ServiceError> {
        let timezone = config.resolve_timezone()?;
        Ok(Self {
            aggregator: PositionAggregator::new(service),
            writer: ReportWriter::new(timezone),
            config,
            timezone,
        })
    }

    /// Run one aggregate-then-export cycle for the current trading day.
    ///
    /// Returns the written report path. Retrieval and I/O failures abort
    /// the cycle with nothing written at the final path.
    pub async fn run_cycle(&self) -> Result<PathBuf> {
        let date = Utc::now().with_timezone(&self.timezone).date_naive();
        info!("Starting extraction cycle for trading day {date}");

        let position = self
            .aggregator
            .aggregate(date)
            .await
            .context("Trade aggregation failed")?;
        self.writer
            .write(&position, &self.config.output_dir)
            .context("Report export failed")
    }

    /// Run cycles until the shutdown signal fires.
    ///
    /// The first cycle runs immediately, later ones at the configured
    /// interval. A failed cycle never stops the loop.
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) {
        let period = Duration::from_secs(self.config.interval_minutes * 60);
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Extraction scheduled every {} minutes",
            self.config.interval_minutes
        );

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match self.run_cycle().await {
                        Ok(path) => info!("Extraction cycle completed: {}", path.display()),
                        Err(e) => error!("Extraction cycle failed: {e:#}"),
                    }
                }
                _ = shutdown.recv() => {
                    info!("Extraction worker received shutdown signal");
                    break;
                }
            }
        }
    }
}
