//! Common error types for services

use thiserror::Error;

/// Service error types
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Trade retrieval from the upstream power service failed
    #[error("Trade retrieval failed: {0}")]
    TradeRetrieval(String),

    /// Invalid configuration supplied at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
