//! Common domain types for the power position services

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
