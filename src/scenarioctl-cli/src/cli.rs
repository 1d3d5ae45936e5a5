//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// Terminal editor for the scenario-testing database.
#[derive(Debug, Parser)]
#[command(name = "scenarioctl", version, about, long_about = None)]
pub struct Cli {
    /// Database location: a file path or a `sqlite://` URL
    #[arg(short, long, value_name = "URL")]
    pub database: Option<String>,

    /// Configuration file (defaults to ./scenarioctl.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// File to append logs to
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable file logging
    #[arg(long)]
    pub no_log: bool,
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    #[serde(alias = "warning")]
    Warn,
    /// Informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Debug messages and above
    Debug,
    /// Everything including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}
