//! Power Connector
//!
//! Access to the upstream power trading system:
//! - `PowerService` trait: retrieve the trades of a trading day
//! - `SimulatedPowerService`: randomized stand-in for the vendor feed

pub mod simulated;

pub use simulated::{SimulatedPowerService, SimulatorConfig};

use async_trait::async_trait;
use chrono::NaiveDate;
use services_common::{PowerTrade, ServiceError};

/// Upstream source of power trades.
///
/// Retrieval may fail transiently; callers treat any failure as fatal to
/// the current extraction cycle and do not retry here.
#[async_trait]
pub trait PowerService: Send + Sync {
    /// Retrieve all trades for the given nominal trading date
    async fn get_trades(&self, date: NaiveDate) -> Result<Vec<PowerTrade>, ServiceError>;
}
