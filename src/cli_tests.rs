//! Unit tests for argument handling, stdin input and exit statuses.

#[cfg(test)]
mod cli_tests {
    use crate::check::DocumentKind;
    use crate::cli::*;
    use crate::config::AppConfig;
    use crate::error::{CliError, ConfigError};
    use crate::input::read_document_from;
    use crate::response::SignalResponse;

    const BUY: &str = r#"{"symbol":"rb2405","action":"BUY","price":3650.5,"timestamp":"2025-01-01 09:30:00","processed":false,"strategy":"LONG"}"#;
    const HOLD: &str = r#"{"symbol":"rb2405","action":"HOLD","price":3650.5,"timestamp":"2025-01-01 09:30:00","processed":false,"strategy":"LONG"}"#;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ============= parse_args Tests =============

    #[test]
    fn test_parse_args_valid() {
        let argv = args(&["lines", "-"]);
        let (kind, source) = parse_args(&argv).unwrap();

        assert_eq!(kind, DocumentKind::Lines);
        assert_eq!(source, "-");
    }

    #[test]
    fn test_parse_args_wrong_arity() {
        assert!(matches!(parse_args(&args(&["signal"])), Err(CliError::Usage)));
        assert!(matches!(parse_args(&args(&[])), Err(CliError::Usage)));
    }

    #[test]
    fn test_parse_args_unknown_command() {
        match parse_args(&args(&["webhook", "-"])) {
            Err(CliError::UnknownCommand(command)) => assert_eq!(command, "webhook"),
            other => panic!("Expected UnknownCommand, got {:?}", other),
        }
    }

    // ============= stdin Tests =============

    #[tokio::test]
    async fn test_read_document_dash_reads_stdin() {
        let text = read_document_from("-", BUY.as_bytes()).await.unwrap();
        assert_eq!(text, BUY);
    }

    // ============= exit_code Tests =============

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(&Ok(SignalResponse::ok("fine"))), EXIT_CONFORMS);
        assert_eq!(exit_code(&Ok(SignalResponse::failure("bad"))), EXIT_VIOLATION);
        assert_eq!(exit_code(&Err(CliError::Usage)), EXIT_USAGE);
        assert_eq!((EXIT_CONFORMS, EXIT_VIOLATION, EXIT_USAGE), (0, 1, 2));
    }

    #[tokio::test]
    async fn test_run_conforming_stdin_exits_zero() {
        let config = AppConfig::default();
        let result = run(&args(&["signal", "-"]), &config, BUY.as_bytes()).await;

        assert_eq!(exit_code(&result), 0);
        assert_eq!(result.unwrap().signals()[0].price, 3650.5);
    }

    #[tokio::test]
    async fn test_run_violation_exits_one() {
        let config = AppConfig::default();
        let result = run(&args(&["signal", "-"]), &config, HOLD.as_bytes()).await;

        assert_eq!(exit_code(&result), 1);
    }

    #[tokio::test]
    async fn test_run_malformed_json_exits_one() {
        let config = AppConfig::default();
        let result = run(&args(&["response", "-"]), &config, "{oops".as_bytes()).await;

        assert_eq!(exit_code(&result), 1);
    }

    #[tokio::test]
    async fn test_run_usage_and_io_exit_two() {
        let config = AppConfig::default();

        let unknown = run(&args(&["webhook", "-"]), &config, BUY.as_bytes()).await;
        assert_eq!(exit_code(&unknown), 2);

        let missing_path = std::env::temp_dir().join("signal-contract-cli-missing.json");
        let argv = args(&["signal", missing_path.to_str().unwrap()]);
        let unreadable = run(&argv, &config, BUY.as_bytes()).await;
        assert!(matches!(unreadable, Err(CliError::Read { .. })));
        assert_eq!(exit_code(&unreadable), 2);
    }

    // ============= startup_log_level Tests =============

    #[test]
    fn test_startup_log_level_from_config() {
        let config = AppConfig::from_yaml("log_level: debug\n").unwrap();
        let loaded: Result<AppConfig, ConfigError> = Ok(config);
        assert_eq!(startup_log_level(&loaded), "debug");
    }

    #[test]
    fn test_startup_log_level_when_config_fails() {
        let path = std::env::temp_dir().join(format!(
            "signal-contract-cli-{}-broken.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "log_level: [unclosed\n").unwrap();
        let loaded = AppConfig::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(loaded.is_err());
        assert_eq!(startup_log_level(&loaded), "info");
    }

    // ============= render Tests =============

    #[test]
    fn test_render_compact_and_pretty() {
        let outcome = SignalResponse::failure("not found");
        let compact = AppConfig::from_yaml("pretty: false\n").unwrap();

        assert_eq!(
            render(&outcome, &compact).unwrap(),
            r#"{"success":false,"message":"not found"}"#
        );
        assert!(render(&outcome, &AppConfig::default()).unwrap().contains('\n'));
    }
}
