use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;
use crate::validate::ValidationOptions;

pub const DEFAULT_CONFIG_PATH: &str = "signal-contract.yaml";
pub const CONFIG_PATH_ENV: &str = "SIGNAL_CONTRACT_CONFIG";

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_true")]
    pub deny_unknown_fields: bool,

    #[serde(default)]
    pub normalize_action: bool,

    /// Pretty-print the response written to stdout.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            deny_unknown_fields: true,
            normalize_action: false,
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Loads `.env`, then reads the file named by `SIGNAL_CONTRACT_CONFIG`
    /// (or `signal-contract.yaml`). A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };
        Self::from_yaml(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            deny_unknown_fields: self.deny_unknown_fields,
            normalize_action: self.normalize_action,
        }
    }
}
