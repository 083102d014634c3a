//! Power Position Service
//!
//! Aggregates a trading day's power trades into local-hour volume buckets
//! and exports them as timestamped `PowerPosition` CSV reports:
//! - `HourlyPosition` / `PositionAggregator`: trade-to-hour fold
//! - `ReportWriter`: trading-day-ordered CSV export
//! - `ExtractionWorker`: periodic extraction loop

pub mod aggregator;
pub mod config;
pub mod report;
pub mod worker;

pub use aggregator::{HourlyPosition, PositionAggregator};
pub use config::PositionConfig;
pub use report::ReportWriter;
pub use worker::ExtractionWorker;
