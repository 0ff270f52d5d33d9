//! Integration tests for the signal contract.
//! These tests verify that the public pieces work together correctly.

use serde_json::json;
use signal_contract::check::{check_document, DocumentKind};
use signal_contract::codec::{decode_response, decode_signal, encode_response, encode_signal};
use signal_contract::input::{read_document, read_file};
use signal_contract::validate::{normalize_signal, validate_response, validate_signal};
use signal_contract::{AppConfig, SignalAction, SignalError, SignalResponse, TradingSignal};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("signal-contract-it-{}-{}", std::process::id(), name))
}

/// A freshly built signal passes the strict validator once encoded
#[test]
fn test_new_signal_conforms_to_contract() {
    let signal = TradingSignal::new("rb2405", SignalAction::Buy, 3650.0, "LONG");
    let value = serde_json::to_value(&signal).unwrap();

    assert!(validate_signal(&value).is_ok());
    assert!(value.get("id").is_none());
}

/// BUY accepted, HOLD rejected, both by the validator and the typed decoder
#[test]
fn test_action_is_closed_enumeration() {
    let mut value = json!({
        "symbol": "rb2405",
        "action": "BUY",
        "price": 3650.0,
        "timestamp": "2025-01-01T09:30:00Z",
        "processed": false,
        "strategy": "LONG"
    });
    assert!(validate_signal(&value).is_ok());
    assert!(decode_signal(&value.to_string()).is_ok());

    value["action"] = json!("HOLD");
    assert!(validate_signal(&value).is_err());
    assert!(decode_signal(&value.to_string()).is_err());
}

/// Envelope with signals survives encode, validate and decode unchanged
#[test]
fn test_response_envelope_flow() {
    let signals = vec![
        TradingSignal::new("BTC/USD", SignalAction::Buy, 50000.0, "LONG").with_id(1),
        TradingSignal::new("BTC/USD", SignalAction::Sell, 50500.0, "LONG").with_id(2),
    ];
    let response = SignalResponse::with_signals("Signals", signals);

    let encoded = encode_response(&response).unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert!(validate_response(&value).is_ok());

    let decoded = decode_response(&encoded).unwrap();
    assert_eq!(decoded, response);
    assert_eq!(decoded.signals()[1].action, SignalAction::Sell);
}

/// Lenient config normalizes action before decoding
#[test]
fn test_config_drives_normalization() {
    let config = AppConfig::from_yaml("normalize_action: true\n").unwrap();
    let value = json!({
        "symbol": "rb2405",
        "action": "buy",
        "price": 3650.0,
        "timestamp": "2025-01-01T09:30:00Z",
        "processed": false,
        "strategy": "LONG"
    });

    let signal = normalize_signal(value.clone(), &config.validation_options()).unwrap();
    assert_eq!(signal.action, SignalAction::Buy);

    let strict = AppConfig::default();
    assert!(matches!(
        normalize_signal(value, &strict.validation_options()),
        Err(SignalError::Invalid(_))
    ));
}

/// Reading a JSON-lines file from disk and checking it end to end
#[tokio::test]
async fn test_read_and_check_lines_file() {
    let first = TradingSignal::new("A", SignalAction::Buy, 1.0, "s");
    let second = TradingSignal::new("B", SignalAction::Sell, 2.0, "s");
    let body = format!(
        "{}\n{}\n",
        encode_signal(&first).unwrap(),
        encode_signal(&second).unwrap()
    );
    let path = temp_path("signals.jsonl");
    tokio::fs::write(&path, body).await.unwrap();

    let text = read_document(path.to_str().unwrap()).await.unwrap();
    tokio::fs::remove_file(&path).await.ok();

    let options = AppConfig::default().validation_options();
    let outcome = check_document(DocumentKind::Lines, &text, &options);
    assert!(outcome.success);
    assert_eq!(outcome.signals(), &[first, second]);
}

/// Missing input files surface as I/O errors
#[tokio::test]
async fn test_read_missing_file() {
    let result = read_file(temp_path("missing.json")).await;
    assert!(matches!(result, Err(SignalError::Io(_))));
}
