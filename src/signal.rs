use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of a trading signal. Closed set: anything other than the two
/// upper-case literals fails to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

impl SignalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            SignalAction::Buy => SignalAction::Sell,
            SignalAction::Sell => SignalAction::Buy,
        }
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown signal action '{found}' (expected BUY or SELL)")]
pub struct ParseActionError {
    pub found: String,
}

/// Lenient parse: trims and ignores case. Serde decoding does not go
/// through here and stays exact.
impl FromStr for SignalAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(SignalAction::Buy),
            "SELL" => Ok(SignalAction::Sell),
            _ => Err(ParseActionError {
                found: s.to_string(),
            }),
        }
    }
}

/// A single directional trading instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    /// Assigned by whatever stores the signal; `None` until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub symbol: String,
    pub action: SignalAction,
    pub price: f64,
    /// ISO-8601 by convention only.
    pub timestamp: String,
    pub processed: bool,
    pub strategy: String,
}

impl TradingSignal {
    /// Unpersisted, unprocessed signal stamped with the current UTC time.
    pub fn new(
        symbol: impl Into<String>,
        action: SignalAction,
        price: f64,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            symbol: symbol.into(),
            action,
            price,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            processed: false,
            strategy: strategy.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Best-effort parse of `timestamp`. Accepts RFC 3339 and the SQLite
    /// `CURRENT_TIMESTAMP` layout (`YYYY-MM-DD HH:MM:SS[.fff]`, taken as UTC).
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
