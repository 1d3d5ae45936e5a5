//! Runner - terminal lifecycle and the async event loop.
//!
//! ```text
//! run(db)
//!   └─ ScenarioTerminal (raw mode, alternate screen, panic hook)
//!   └─ EventLoop::run
//!        tokio::select! { terminal input, completion channel }
//! ```

pub mod event_loop;
pub mod terminal;

use std::sync::Arc;

use anyhow::{Context, Result};
use scenarioctl_store::Db;
use tracing::info;

use crate::app::App;
use crate::entities::nav_entries;

pub use event_loop::{EventLoop, execute, spawn_command};
pub use terminal::{ScenarioTerminal, TerminalGuard, TerminalOptions, restore_terminal};

/// Run the interface against `db` until the operator quits.
pub async fn run(db: Arc<Db>) -> Result<()> {
    run_with_options(db, TerminalOptions::default()).await
}

pub async fn run_with_options(db: Arc<Db>, options: TerminalOptions) -> Result<()> {
    if !terminal::is_interactive() {
        anyhow::bail!("scenarioctl needs an interactive terminal");
    }

    let app = App::new(nav_entries(db)).context("cannot build the table list")?;
    let mut terminal =
        ScenarioTerminal::with_options(options).context("failed to initialize terminal")?;

    info!("Interface started");
    let result = EventLoop::new(app).run(&mut terminal).await;
    info!("Interface stopped");
    result
}
