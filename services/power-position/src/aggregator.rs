//! Hourly position aggregation
//!
//! Folds per-period trade volumes into local-hour buckets. A fixed array
//! of 24 accumulators indexed by wall-clock hour keeps the bounded domain
//! explicit; only hours that received a contribution appear in the sparse
//! view the report writer consumes.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use power_connector::PowerService;
use services_common::{PowerTrade, ServiceError, TradingDay};

/// Hour buckets per report
pub const HOURS_PER_DAY: usize = 24;

/// Aggregated traded volume per local wall-clock hour for one trading day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyPosition {
    volumes: [f64; HOURS_PER_DAY],
    present: [bool; HOURS_PER_DAY],
    skipped_periods: usize,
}

impl HourlyPosition {
    /// Create an empty position
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold all periods of all trades into hourly buckets.
    ///
    /// Periods need not be contiguous or complete; period numbers above
    /// the day's granularity wrap modulo 24. Malformed period numbers
    /// (zero or negative) are skipped and counted, never an error.
    #[must_use]
    pub fn from_trades(trades: &[PowerTrade]) -> Self {
        let mut position = Self::new();
        for trade in trades {
            for period in &trade.periods {
                position.add_period(period.period, period.volume);
            }
        }
        position
    }

    /// Add one period volume into its hour bucket
    pub fn add_period(&mut self, period: i32, volume: f64) {
        match TradingDay::hour_for_period(period) {
            Some(hour) => {
                let slot = hour as usize;
                self.volumes[slot] += volume;
                self.present[slot] = true;
            }
            None => {
                self.skipped_periods += 1;
                warn!("Skipping malformed period number {period}");
            }
        }
    }

    /// Volume for the given hour, if any period contributed to it
    #[must_use]
    pub fn volume_at(&self, hour: u32) -> Option<f64> {
        let slot = hour as usize;
        (slot < HOURS_PER_DAY && self.present[slot]).then(|| self.volumes[slot])
    }

    /// Present hours with their volumes, in plain hour order (0..=23).
    ///
    /// Report ordering is the writer's concern, not this type's.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (0..HOURS_PER_DAY)
            .filter(|&slot| self.present[slot])
            .map(|slot| (slot as u32, self.volumes[slot]))
    }

    /// Sparse hour -> volume view
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<u32, f64> {
        self.iter().collect()
    }

    /// Number of hours that received at least one contribution
    #[must_use]
    pub fn len(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// True when no hour received a contribution
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|&p| p)
    }

    /// Malformed periods dropped during the fold
    #[must_use]
    pub const fn skipped_periods(&self) -> usize {
        self.skipped_periods
    }

    /// Sum over all present hours
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.iter().map(|(_, volume)| volume).sum()
    }
}

/// Retrieves a trading day's trades and folds them into hourly buckets
#[derive(Debug)]
pub struct PositionAggregator<S> {
    service: S,
}

impl<S: PowerService> PositionAggregator<S> {
    /// Create an aggregator over the given trade source
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Aggregate the trading day's trades into an hourly position.
    ///
    /// The only failure path is upstream retrieval; the fold itself
    /// never fails over well-formed input.
    pub async fn aggregate(&self, date: NaiveDate) -> Result<HourlyPosition, ServiceError> {
        let trades = self.service.get_trades(date).await?;
        info!("Retrieved {} trades for trading day {date}", trades.len());

        let position = HourlyPosition::from_trades(&trades);
        if position.skipped_periods() > 0 {
            warn!(
                "Dropped {} malformed periods during aggregation",
                position.skipped_periods()
            );
        }
        debug!(
            "Aggregated {} hourly buckets, total volume {}",
            position.len(),
            position.total_volume()
        );
        Ok(position)
    }
}
