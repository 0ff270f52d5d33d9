use std::process::ExitCode;

use signal_contract::cli::{self, EXIT_USAGE};
use signal_contract::AppConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn setup_logging(level: &str) {
    // stderr, so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let loaded = AppConfig::load();

    // Setup Logging before anything is reported
    setup_logging(&cli::startup_log_level(&loaded));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    info!("Loaded Configuration: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = cli::run(&args, &config, tokio::io::stdin()).await;

    let rendered = match &result {
        Ok(outcome) => cli::render(outcome, &config),
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(cli::exit_code(&result));
        }
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    }

    ExitCode::from(cli::exit_code(&result))
}
