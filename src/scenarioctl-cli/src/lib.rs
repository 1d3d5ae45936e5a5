//! scenarioctl CLI library module.
//!
//! Startup pieces shared by the `scenarioctl` binary and its tests:
//! - `cli` - command-line arguments
//! - `config` - layered configuration (defaults, TOML file, environment, flags)
//! - `logging` - file logging through a non-blocking writer

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{Cli, LogLevel};
pub use config::{AppConfig, ConfigError, LogConfig};
pub use logging::LogGuard;
