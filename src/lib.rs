//! Signal Contract - the trading signal data contract
//!
//! This library provides the `TradingSignal` record and the `SignalResponse`
//! envelope, a strict structural validator for untyped JSON, and the codec
//! used to move both shapes across a boundary.

pub mod check;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod input;
pub mod response;
pub mod signal;
pub mod validate;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{CliError, ConfigError, SignalError};
pub use response::SignalResponse;
pub use signal::{SignalAction, TradingSignal};
pub use validate::{ValidationOptions, ValidationReport};

#[cfg(test)]
mod cli_tests;
