//! Document checks behind the `signal-contract` commands.
//!
//! Each check takes raw text and answers with a `SignalResponse`: on success
//! the decoded signals travel in `data`, on failure `message` lists what was
//! wrong and `data` is left out.

use serde_json::Value;
use tracing::{debug, warn};

use crate::codec::strip_bom;
use crate::error::SignalError;
use crate::response::SignalResponse;
use crate::signal::TradingSignal;
use crate::validate::{normalize_signal, validate_response_with, ValidationOptions};

/// Which shape a document is expected to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Signal,
    Response,
    Lines,
}

impl DocumentKind {
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "signal" => Some(DocumentKind::Signal),
            "response" => Some(DocumentKind::Response),
            "lines" => Some(DocumentKind::Lines),
            _ => None,
        }
    }
}

pub fn check_document(
    kind: DocumentKind,
    input: &str,
    options: &ValidationOptions,
) -> SignalResponse {
    match kind {
        DocumentKind::Signal => check_signal_document(input, options),
        DocumentKind::Response => check_response_document(input, options),
        DocumentKind::Lines => check_signal_lines(input, options),
    }
}

pub fn check_signal_document(input: &str, options: &ValidationOptions) -> SignalResponse {
    match parse_value(input).and_then(|value| normalize_signal(value, options)) {
        Ok(signal) => {
            debug!("signal {} {} conforms", signal.action, signal.symbol);
            SignalResponse::with_signals("Signal conforms", vec![signal])
        }
        Err(e) => {
            warn!("signal rejected: {}", e);
            SignalResponse::failure(e.to_string())
        }
    }
}

pub fn check_response_document(input: &str, options: &ValidationOptions) -> SignalResponse {
    match decode_envelope(input, options) {
        Ok(envelope) => {
            let message = format!(
                "Response conforms (success={}, {} signal(s))",
                envelope.success,
                envelope.signal_count()
            );
            debug!("{}", message);
            SignalResponse {
                success: true,
                message,
                data: envelope.data,
            }
        }
        Err(e) => {
            warn!("response rejected: {}", e);
            SignalResponse::failure(e.to_string())
        }
    }
}

/// JSON-lines of signals. Every line is checked; the failure message names
/// each bad line.
pub fn check_signal_lines(input: &str, options: &ValidationOptions) -> SignalResponse {
    let mut signals = Vec::new();
    let mut failures = Vec::new();

    for (idx, line) in strip_bom(input).lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_value(line).and_then(|value| normalize_signal(value, options)) {
            Ok(signal) => signals.push(signal),
            Err(e) => failures.push(SignalError::Line {
                line: idx + 1,
                source: Box::new(e),
            }),
        }
    }

    if failures.is_empty() {
        debug!("{} signal line(s) conform", signals.len());
        return SignalResponse::with_signals(
            format!("{} signal(s) conform", signals.len()),
            signals,
        );
    }

    warn!(
        "{} of {} line(s) rejected",
        failures.len(),
        failures.len() + signals.len()
    );
    let details: Vec<String> = failures.iter().map(|e| e.to_string()).collect();
    SignalResponse::failure(format!(
        "{} line(s) rejected: {}",
        failures.len(),
        details.join(" | ")
    ))
}

fn parse_value(input: &str) -> Result<Value, SignalError> {
    Ok(serde_json::from_str(strip_bom(input))?)
}

fn decode_envelope(
    input: &str,
    options: &ValidationOptions,
) -> Result<SignalResponse, SignalError> {
    let mut value = parse_value(input)?;
    validate_response_with(&value, options)?;

    let data = match value.get_mut("data").map(Value::take) {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| normalize_signal(item, options))
                .collect::<Result<Vec<TradingSignal>, _>>()?,
        ),
        _ => None,
    };

    Ok(SignalResponse {
        success: value["success"].as_bool().unwrap_or_default(),
        message: value["message"].as_str().unwrap_or_default().to_string(),
        data,
    })
}
