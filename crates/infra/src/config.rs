//! Configuration loading and representation.
//!
//! The only settings are where the catalog lives and how logs are rendered.
//! Both have defaults, so a bare invocation works against
//! `productos_db.json` in the current directory. Optional environment
//! overrides are never fatal: an unusable value is reported back alongside
//! the configuration and the default is used instead.

use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

use stockroom_observability::LogFormat;

pub const CATALOG_PATH_VAR: &str = "STOCKROOM_CATALOG";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const DEFAULT_CATALOG_PATH: &str = "productos_db.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON catalog file handed to the product store.
    pub catalog_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_format: LogFormat::Text,
        }
    }
}

/// Load configuration from the process environment.
///
/// Returns the configuration together with every override that was ignored.
pub fn load_app_config_from_env() -> (AppConfig, Vec<ConfigError>) {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> (AppConfig, Vec<ConfigError>)
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut config = AppConfig::default();
    let mut ignored = Vec::new();

    match lookup(CATALOG_PATH_VAR) {
        Ok(raw) if raw.trim().is_empty() => ignored.push(ConfigError::InvalidEnvVar {
            var: CATALOG_PATH_VAR.to_string(),
            reason: "path cannot be empty".to_string(),
        }),
        Ok(raw) => config.catalog_path = PathBuf::from(raw),
        Err(VarError::NotUnicode(_)) => ignored.push(ConfigError::InvalidEnvVar {
            var: CATALOG_PATH_VAR.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
        Err(VarError::NotPresent) => {}
    }

    if let Ok(raw) = lookup(LOG_FORMAT_VAR) {
        match parse_log_format(&raw) {
            Ok(format) => config.log_format = format,
            Err(err) => ignored.push(err),
        }
    }

    (config, ignored)
}

fn parse_log_format(s: &str) -> Result<LogFormat, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar {
            var: LOG_FORMAT_VAR.to_string(),
            reason: format!("expected 'text' or 'json', got {other:?}"),
        }),
    }
}
