use serde::{Deserialize, Serialize};

use crate::signal::TradingSignal;

/// Success/failure envelope. `data: None` and `data: Some(vec![])` are
/// different values on the wire (field omitted vs `[]`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<TradingSignal>>,
}

impl SignalResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_signals(message: impl Into<String>, signals: Vec<TradingSignal>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(signals),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn signal_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn signals(&self) -> &[TradingSignal] {
        self.data.as_deref().unwrap_or(&[])
    }
}
