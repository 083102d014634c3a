//! Simulated upstream power service
//!
//! Stands in for the vendor trading system: a random handful of trades
//! per call, each carrying the trading day's full period complement, with
//! occasional transient retrieval failures and a small response latency.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use services_common::{PowerPeriod, PowerTrade, ServiceError, TradingDay};

use crate::PowerService;

/// Simulated power service configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Market timezone, drives the per-day period count
    pub timezone: Tz,

    /// Minimum trades returned per call
    pub min_trades: usize,

    /// Maximum trades returned per call
    pub max_trades: usize,

    /// Per-period volumes are drawn from -max_volume..max_volume
    pub max_volume: f64,

    /// Probability of a simulated transient retrieval failure (0.0..=1.0)
    pub failure_rate: f64,

    /// Simulated response latency in milliseconds
    pub latency_ms: u64,

    /// RNG seed for reproducible runs; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::London,
            min_trades: 1,
            max_trades: 5,
            max_volume: 1000.0,
            failure_rate: 0.05,
            latency_ms: 200,
            seed: None,
        }
    }
}

/// Randomized `PowerService` implementation
#[derive(Debug)]
pub struct SimulatedPowerService {
    config: SimulatorConfig,
    rng: Mutex<StdRng>,
}

impl SimulatedPowerService {
    /// Create a simulator with the given configuration
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    fn generate_trades(&self, date: NaiveDate) -> Result<Vec<PowerTrade>, ServiceError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| ServiceError::TradeRetrieval(format!("RNG poisoned: {e}")))?;

        if rng.gen_range(0.0..1.0) < self.config.failure_rate {
            return Err(ServiceError::TradeRetrieval(
                "simulated transient failure in upstream power service".to_string(),
            ));
        }

        let period_count = TradingDay::new(date, self.config.timezone)
            .period_count()
            .max(1) as i32;
        let trade_count = rng.gen_range(self.config.min_trades..=self.config.max_trades);

        let trades = (0..trade_count)
            .map(|i| {
                let periods = (1..=period_count)
                    .map(|p| {
                        let volume =
                            rng.gen_range(-self.config.max_volume..=self.config.max_volume);
                        PowerPeriod::new(p, volume)
                    })
                    .collect();
                PowerTrade::new(format!("PWR-{}-{i:04}", date.format("%Y%m%d")), periods)
            })
            .collect();

        Ok(trades)
    }
}

#[async_trait]
impl PowerService for SimulatedPowerService {
    async fn get_trades(&self, date: NaiveDate) -> Result<Vec<PowerTrade>, ServiceError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }

        let trades = self.generate_trades(date)?;
        debug!("Simulated {} trades for {}", trades.len(), date);
        Ok(trades)
    }
}
