//! JSON encoding and decoding of the contract shapes.

use crate::error::SignalError;
use crate::response::SignalResponse;
use crate::signal::TradingSignal;

pub fn encode_signal(signal: &TradingSignal) -> Result<String, SignalError> {
    Ok(serde_json::to_string(signal)?)
}

pub fn encode_response(response: &SignalResponse) -> Result<String, SignalError> {
    Ok(serde_json::to_string(response)?)
}

pub fn encode_response_pretty(response: &SignalResponse) -> Result<String, SignalError> {
    Ok(serde_json::to_string_pretty(response)?)
}

pub fn decode_signal(input: &str) -> Result<TradingSignal, SignalError> {
    Ok(serde_json::from_str(strip_bom(input))?)
}

pub fn decode_response(input: &str) -> Result<SignalResponse, SignalError> {
    Ok(serde_json::from_str(strip_bom(input))?)
}

/// Decode JSON-lines input. Blank lines are skipped; failures carry the
/// 1-based line number.
pub fn decode_signal_lines(input: &str) -> Vec<Result<TradingSignal, SignalError>> {
    strip_bom(input)
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|e| SignalError::Line {
                line: idx + 1,
                source: Box::new(SignalError::Json(e)),
            })
        })
        .collect()
}

pub(crate) fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}
