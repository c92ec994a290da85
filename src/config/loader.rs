//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

use super::types::AppConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "SALARY_LEDGER_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./config/salary-ledger.yaml";

/// Loads and validates service configuration.
///
/// # File format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 3000
/// listing:
///   default_limit: 50
///   max_limit: 500
/// display:
///   currency_symbol: "$"
/// logging:
///   level: info
/// ```
///
/// # Example
///
/// ```
/// use salary_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("server:\n  port: 8080\n").unwrap();
/// assert_eq!(loader.config().server.port, 8080);
/// assert_eq!(loader.config().listing.default_limit, 50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or holds an
    /// unusable setting.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConfigError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from the path in `SALARY_LEDGER_CONFIG`.
    ///
    /// Without the variable, the default path is tried and built-in defaults are
    /// used when that file does not exist. A path named by the variable must
    /// exist.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parses configuration from an inline YAML document.
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source: &str) -> ConfigResult<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &AppConfig) -> ConfigResult<()> {
        if config.listing.max_limit == 0 {
            return Err(ConfigError::InvalidSetting {
                setting: "listing.max_limit".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if config.listing.default_limit > config.listing.max_limit {
            return Err(ConfigError::InvalidSetting {
                setting: "listing.default_limit".to_string(),
                message: format!(
                    "{} exceeds listing.max_limit {}",
                    config.listing.default_limit, config.listing.max_limit
                ),
            });
        }
        if config.display.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                setting: "display.currency_symbol".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
