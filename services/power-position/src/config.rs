//! Power position service configuration

use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use services_common::ServiceError;

/// Power position service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionConfig {
    /// Minutes between extraction cycles
    pub interval_minutes: u64,

    /// Directory receiving the CSV reports
    pub output_dir: PathBuf,

    /// IANA timezone of the power market, used for the trading-day
    /// boundary and report timestamps
    pub timezone: String,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 60,
            output_dir: PathBuf::from("./output"),
            timezone: "Europe/London".to_string(),
        }
    }
}

impl PositionConfig {
    /// Resolve the configured timezone identifier
    pub fn resolve_timezone(&self) -> Result<Tz, ServiceError> {
        Tz::from_str(&self.timezone).map_err(|_| {
            ServiceError::InvalidConfig(format!("unknown timezone {:?}", self.timezone))
        })
    }

    /// Validate once at startup; malformed configuration is fatal,
    /// per-cycle code never re-validates.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.interval_minutes == 0 {
            return Err(ServiceError::InvalidConfig(
                "interval_minutes must be positive".to_string(),
            ));
        }
        self.resolve_timezone()?;
        Ok(())
    }
}
