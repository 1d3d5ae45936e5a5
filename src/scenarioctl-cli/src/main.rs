//! scenarioctl - terminal editor for the scenario-testing database.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use scenarioctl_cli::{AppConfig, Cli, logging};
use scenarioctl_store::{Db, StoreConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;
    let _log_guard = logging::init(&config.log)?;

    let location = config.database()?;
    let store_config = StoreConfig::from_url(location)?;
    let db = Db::open(&store_config)?;
    db.migrate().context("failed to prepare database schema")?;

    info!(database = %store_config.path.display(), "Starting scenarioctl");
    scenarioctl_tui::run(Arc::new(db)).await
}
