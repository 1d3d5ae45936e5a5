//! Layered startup configuration.
//!
//! Later layers win: built-in defaults, then the TOML file, then the
//! environment, then command-line flags.
//!
//! ```toml
//! database = "sqlite://scenarios.db"
//!
//! [log]
//! level = "debug"
//! file = "scenarioctl.log"
//! enabled = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::cli::{Cli, LogLevel};

/// File read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "scenarioctl.toml";

/// Default log destination, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "scenarioctl.log";

/// Environment variables holding the database location, in priority order.
pub const DATABASE_ENV_VARS: [&str; 2] = ["SCENARIOCTL_DATABASE", "DB_URL"];
pub const LOG_LEVEL_ENV_VAR: &str = "SCENARIOCTL_LOG_LEVEL";
pub const LOG_FILE_ENV_VAR: &str = "SCENARIOCTL_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("no database configured; set DB_URL or pass --database")]
    MissingDatabase,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub file: PathBuf,
    pub enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database location as accepted by `StoreConfig::from_url`.
    pub database: Option<String>,
    pub log: LogConfig,
}

impl AppConfig {
    /// Build the effective configuration from every layer.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::load(cli.config.as_deref())?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_cli(cli);
        Ok(config)
    }

    /// Read the config file at `path`, or [`DEFAULT_CONFIG_FILE`] when present.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override from environment variables; blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(database) = DATABASE_ENV_VARS.into_iter().find_map(|key| get(key)) {
            self.database = Some(database);
        }
        if let Some(level) = get(LOG_LEVEL_ENV_VAR) {
            self.log.level =
                LogLevel::from_str_loose(&level).ok_or(ConfigError::InvalidLogLevel(level))?;
        }
        if let Some(file) = get(LOG_FILE_ENV_VAR) {
            self.log.file = PathBuf::from(file);
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref database) = cli.database {
            self.database = Some(database.clone());
        }
        if let Some(level) = cli.log_level {
            self.log.level = level;
        }
        if let Some(ref file) = cli.log_file {
            self.log.file = file.clone();
        }
        if cli.no_log {
            self.log.enabled = false;
        }
    }

    /// The configured database location.
    pub fn database(&self) -> Result<&str, ConfigError> {
        self.database
            .as_deref()
            .map(str::trim)
            .filter(|database| !database.is_empty())
            .ok_or(ConfigError::MissingDatabase)
    }
}
