//! # daylog-config
//!
//! Layered configuration loading for daylog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DAYLOG_*` prefix, `__` as separator)
//! 2. Project-level `./daylog.toml`, or the file passed with `--config`
//! 3. User-level `~/.config/daylog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DAYLOG_SERVER__PORT` -> `server.port`,
//! `DAYLOG_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use daylog_config::DaylogConfig;
//!
//! let config = DaylogConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.bind_address());
//! ```

mod database;
mod error;
mod log;
mod server;

pub use database::{DatabaseConfig, IN_MEMORY};
pub use error::ConfigError;
pub use log::LogConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = "daylog.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DAYLOG_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DaylogConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DaylogConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `explicit` replaces the project-local `daylog.toml` lookup and must exist.
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the explicit file is missing, extraction fails,
    /// or a value is out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local or explicit config
        match explicit {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later at bind/open time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "must be between 1 and 65535".into(),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.body_limit_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("daylog").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DaylogConfig::default();
        config.validate().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "daylog.db");
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = DaylogConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.port"));
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let mut config = DaylogConfig::default();
        config.database.path = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let err = DaylogConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }
}
