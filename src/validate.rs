//! Strict structural validation of untyped JSON against the signal contract.
//!
//! Serde stops at the first problem it meets. The checks here walk the whole
//! document and collect every violation, each addressed by its path
//! (`data[2].action`), so a caller can report them all at once.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::SignalError;
use crate::signal::{SignalAction, TradingSignal};

const SIGNAL_FIELDS: &[&str] = &[
    "id",
    "symbol",
    "action",
    "price",
    "timestamp",
    "processed",
    "strategy",
];
const RESPONSE_FIELDS: &[&str] = &["success", "message", "data"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject keys the contract does not name.
    pub deny_unknown_fields: bool,
    /// Accept `action` in any letter case (`buy`, ` Sell `).
    pub normalize_action: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            deny_unknown_fields: true,
            normalize_action: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    NotAnObject,
    MissingField,
    WrongType { expected: &'static str },
    InvalidAction { found: String },
    UnknownField,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Empty for the document root.
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "document"
        } else {
            self.path.as_str()
        };
        match &self.kind {
            ViolationKind::NotAnObject => write!(f, "{} is not an object", path),
            ViolationKind::MissingField => write!(f, "{} is missing", path),
            ViolationKind::WrongType { expected } => {
                write!(f, "{} must be {}", path, expected)
            }
            ViolationKind::InvalidAction { found } => {
                write!(f, "{} must be BUY or SELL, got '{}'", path, found)
            }
            ViolationKind::UnknownField => write!(f, "{} is not a known field", path),
        }
    }
}

/// Every violation found in one document, in check order: declared fields
/// first, then unknown keys sorted by name.
#[derive(Error, Clone, Debug, Default, PartialEq, Eq)]
#[error("{}", join_violations(.violations))]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    fn push(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation { path, kind });
    }

    fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_signal(value: &Value) -> Result<(), ValidationReport> {
    validate_signal_with(value, &ValidationOptions::default())
}

pub fn validate_signal_with(
    value: &Value,
    options: &ValidationOptions,
) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();
    check_signal(value, "", options, &mut report);
    report.into_result()
}

pub fn validate_response(value: &Value) -> Result<(), ValidationReport> {
    validate_response_with(value, &ValidationOptions::default())
}

pub fn validate_response_with(
    value: &Value,
    options: &ValidationOptions,
) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    let Some(obj) = value.as_object() else {
        report.push(String::new(), ViolationKind::NotAnObject);
        return report.into_result();
    };

    require(obj, "", "success", "a boolean", Value::is_boolean, &mut report);
    require(obj, "", "message", "a string", Value::is_string, &mut report);

    match obj.get("data") {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                check_signal(item, &format!("data[{}]", i), options, &mut report);
            }
        }
        Some(_) => report.push(
            "data".to_string(),
            ViolationKind::WrongType {
                expected: "an array",
            },
        ),
    }

    if options.deny_unknown_fields {
        flag_unknown(obj, "", RESPONSE_FIELDS, &mut report);
    }

    report.into_result()
}

/// Validate, canonicalise `action` when normalisation is enabled, then decode.
pub fn normalize_signal(
    mut value: Value,
    options: &ValidationOptions,
) -> Result<TradingSignal, SignalError> {
    validate_signal_with(&value, options)?;

    if options.normalize_action {
        if let Some(action) = value.get_mut("action") {
            let canonical = action
                .as_str()
                .and_then(|raw| raw.parse::<SignalAction>().ok());
            if let Some(canonical) = canonical {
                *action = Value::String(canonical.as_str().to_string());
            }
        }
    }

    Ok(serde_json::from_value(value)?)
}

fn check_signal(
    value: &Value,
    prefix: &str,
    options: &ValidationOptions,
    report: &mut ValidationReport,
) {
    let Some(obj) = value.as_object() else {
        report.push(prefix.to_string(), ViolationKind::NotAnObject);
        return;
    };

    match obj.get("id") {
        None | Some(Value::Null) => {}
        Some(v) if v.is_i64() => {}
        Some(_) => report.push(
            join(prefix, "id"),
            ViolationKind::WrongType {
                expected: "an integer",
            },
        ),
    }

    require(obj, prefix, "symbol", "a string", Value::is_string, report);

    match obj.get("action") {
        None => report.push(join(prefix, "action"), ViolationKind::MissingField),
        Some(Value::String(raw)) => {
            let accepted = if options.normalize_action {
                raw.parse::<SignalAction>().is_ok()
            } else {
                raw == "BUY" || raw == "SELL"
            };
            if !accepted {
                report.push(
                    join(prefix, "action"),
                    ViolationKind::InvalidAction { found: raw.clone() },
                );
            }
        }
        Some(_) => report.push(
            join(prefix, "action"),
            ViolationKind::WrongType {
                expected: "a string",
            },
        ),
    }

    require(obj, prefix, "price", "a number", Value::is_number, report);
    require(obj, prefix, "timestamp", "a string", Value::is_string, report);
    require(obj, prefix, "processed", "a boolean", Value::is_boolean, report);
    require(obj, prefix, "strategy", "a string", Value::is_string, report);

    if options.deny_unknown_fields {
        flag_unknown(obj, prefix, SIGNAL_FIELDS, report);
    }
}

fn require(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
    expected: &'static str,
    check: fn(&Value) -> bool,
    report: &mut ValidationReport,
) {
    match obj.get(key) {
        None => report.push(join(prefix, key), ViolationKind::MissingField),
        Some(v) if check(v) => {}
        Some(_) => report.push(join(prefix, key), ViolationKind::WrongType { expected }),
    }
}

fn flag_unknown(
    obj: &Map<String, Value>,
    prefix: &str,
    known: &[&str],
    report: &mut ValidationReport,
) {
    let mut unknown: Vec<&String> = obj
        .keys()
        .filter(|k| !known.contains(&k.as_str()))
        .collect();
    unknown.sort();
    for key in unknown {
        report.push(join(prefix, key), ViolationKind::UnknownField);
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
