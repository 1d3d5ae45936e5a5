//! # Scenarioctl TUI
//!
//! Terminal interface for editing the scenario-testing tables.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use scenarioctl_store::{Db, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Db::open(&StoreConfig::new("scenarios.db"))?;
//!     db.migrate()?;
//!     scenarioctl_tui::run(Arc::new(db)).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      EventLoop                              │
//! │   tokio::select! { terminal input, AppEvent channel }       │
//! └──────┬──────────────────────────────────────────┬───────────┘
//!        │ keys                                     │ completions
//! ┌──────▼──────┐   PageCommand    ┌────────────────▼───────────┐
//! │     App     │ ───────────────▶ │ AppCommand (spawn_blocking)│
//! │ (focus, nav)│                  │  RecordSource::load        │
//! └──────┬──────┘                  │  Submission::run           │
//!        │                         └────────────────────────────┘
//! ┌──────▼──────┐
//! │ RecordPage  │  rows, cursor, Option<FormState>
//! └──────┬──────┘
//!        │ RecordSource / RecordMutator
//! ┌──────▼──────┐
//! │  entities   │  one table type per store repository
//! └─────────────┘
//! ```
//!
//! ## Main Components
//!
//! - [`RecordPage`] - per-entity state machine (view, create, edit)
//! - [`App`] - focus routing between the table list and the page
//! - [`entities`] - the seven tables wired to `scenarioctl-store`
//! - [`EventLoop`] - async loop running loads and submissions off the UI thread

pub mod app;
pub mod entities;
pub mod events;
pub mod page;
pub mod render;
pub mod runner;

pub use app::{App, AppCommand, AppError, Focus, NavEntry, PageFactory};
pub use events::AppEvent;
pub use page::{
    CrudError, FormSlot, PageCommand, PageMode, RecordId, RecordMutator, RecordPage,
    RecordSource, RowSnapshot, SubmitHandler,
};
pub use runner::{EventLoop, ScenarioTerminal, TerminalOptions, run, run_with_options};
