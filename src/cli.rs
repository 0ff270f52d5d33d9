//! Argument handling and exit statuses for the `signal-contract` binary.

use tokio::io::AsyncRead;
use tracing::info;

use crate::check::{check_document, DocumentKind};
use crate::codec::{encode_response, encode_response_pretty};
use crate::config::AppConfig;
use crate::error::{CliError, ConfigError};
use crate::input::read_document_from;
use crate::response::SignalResponse;

pub const EXIT_CONFORMS: u8 = 0;
pub const EXIT_VIOLATION: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Level the subscriber starts with; a failed config falls back to the
/// default so the failure itself still gets logged.
pub fn startup_log_level(loaded: &Result<AppConfig, ConfigError>) -> String {
    match loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => AppConfig::default().log_level,
    }
}

/// `<signal|response|lines> <path|->`
pub fn parse_args(args: &[String]) -> Result<(DocumentKind, &str), CliError> {
    match args {
        [command, source] => DocumentKind::from_command(command)
            .map(|kind| (kind, source.as_str()))
            .ok_or_else(|| CliError::UnknownCommand(command.clone())),
        _ => Err(CliError::Usage),
    }
}

/// Reads and checks one document; `stdin` backs the `-` source.
pub async fn run<R>(
    args: &[String],
    config: &AppConfig,
    stdin: R,
) -> Result<SignalResponse, CliError>
where
    R: AsyncRead + Unpin,
{
    let (kind, source) = parse_args(args)?;
    let text = read_document_from(source, stdin)
        .await
        .map_err(|error| CliError::Read {
            source_name: source.to_string(),
            error,
        })?;

    info!("Checking {} as {:?}", source, kind);
    Ok(check_document(kind, &text, &config.validation_options()))
}

pub fn render(outcome: &SignalResponse, config: &AppConfig) -> Result<String, CliError> {
    let rendered = if config.pretty {
        encode_response_pretty(outcome)
    } else {
        encode_response(outcome)
    };
    rendered.map_err(CliError::Encode)
}

pub fn exit_code(result: &Result<SignalResponse, CliError>) -> u8 {
    match result {
        Ok(outcome) if outcome.success => EXIT_CONFORMS,
        Ok(_) => EXIT_VIOLATION,
        Err(_) => EXIT_USAGE,
    }
}
