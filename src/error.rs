//! Error types for decoding and checking signal documents
//!
//! Structured, typed errors instead of generic Box<dyn Error>

use thiserror::Error;

use crate::validate::ValidationReport;

/// Errors raised while reading, decoding or validating signal documents
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contract violation: {0}")]
    Invalid(ValidationReport),

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<SignalError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl From<ValidationReport> for SignalError {
    fn from(report: ValidationReport) -> Self {
        SignalError::Invalid(report)
    }
}

/// Command line errors; all of them map to the usage/I/O exit status
#[derive(Error, Debug)]
pub enum CliError {
    #[error("usage: signal-contract <signal|response|lines> <path|->")]
    Usage,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: SignalError,
    },

    #[error("Failed to encode response: {0}")]
    Encode(#[source] SignalError),
}
