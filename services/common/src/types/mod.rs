//! Core types for the power position services

pub mod trade;
pub mod trading_day;

pub use trade::*;
pub use trading_day::*;
