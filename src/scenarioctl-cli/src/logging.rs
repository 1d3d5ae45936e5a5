//! File logging.
//!
//! Stdout belongs to the interface, so logs go to a file through
//! `tracing-appender`'s non-blocking writer.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

/// Flushes buffered log lines when dropped. Hold it until exit.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_str()))
}

/// Install the global subscriber. Returns `None` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<Option<LogGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("failed to open log file {}", config.file.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(Some(LogGuard { _guard: guard }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_installs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file: dir.path().join("scenarioctl.log"),
            enabled: false,
            ..LogConfig::default()
        };

        assert!(init(&config).unwrap().is_none());
        assert!(!config.file.exists());
    }

    #[test]
    fn test_unwritable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file: dir.path().join("missing").join("scenarioctl.log"),
            ..LogConfig::default()
        };

        let err = init(&config).err().unwrap();
        assert!(err.to_string().starts_with("failed to open log file"));
    }
}
