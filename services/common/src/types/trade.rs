//! Power trade records as returned by the upstream power service

use serde::{Deserialize, Serialize};

/// A single settlement-period volume within a power trade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerPeriod {
    /// Settlement period number, 1-based from the trading-day start.
    /// Zero or negative numbers are malformed input.
    pub period: i32,
    /// Traded volume for the period (signed)
    pub volume: f64,
}

impl PowerPeriod {
    /// Create a new period volume
    #[must_use]
    pub const fn new(period: i32, volume: f64) -> Self {
        Self { period, volume }
    }
}

/// A power trade: an opaque identifier plus its per-period volumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerTrade {
    /// Opaque trade identifier assigned by the upstream service
    pub trade_id: String,
    /// Per-period volumes, ordered by period number
    pub periods: Vec<PowerPeriod>,
}

impl PowerTrade {
    /// Create a trade from its identifier and periods
    #[must_use]
    pub fn new(trade_id: impl Into<String>, periods: Vec<PowerPeriod>) -> Self {
        Self {
            trade_id: trade_id.into(),
            periods,
        }
    }

    /// Create a trade covering periods 1..=count, all at the same volume
    #[must_use]
    pub fn with_uniform_volume(trade_id: impl Into<String>, count: i32, volume: f64) -> Self {
        let periods = (1..=count).map(|p| PowerPeriod::new(p, volume)).collect();
        Self::new(trade_id, periods)
    }
}
