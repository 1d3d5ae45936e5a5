//! Scenarioctl Store - SQLite persistence for the scenario-testing tables.
//!
//! One [`Db`] owns a single connection behind a mutex so blocking tasks on
//! any thread can share it through an `Arc`. Each table has a repository
//! borrowing the `Db`:
//!
//! | table | repository |
//! |---|---|
//! | `task` | [`TaskRepository`] |
//! | `plan` | [`PlanRepository`] |
//! | `av` | [`AvRepository`] |
//! | `simulator` | [`SimulatorRepository`] |
//! | `scenario` | [`ScenarioRepository`] |
//! | `map` | [`MapRepository`] |
//! | `sampler` | [`SamplerRepository`] |
//!
//! # Usage
//!
//! ```rust,ignore
//! let db = Db::open(&StoreConfig::new("scenarios.db"))?;
//! db.migrate()?;
//!
//! let maps = MapRepository::new(&db);
//! let id = maps.create(&MapFields::new("Town01"))?;
//! ```

pub mod av_repository;
pub mod error;
pub mod map_repository;
pub mod plan_repository;
pub mod sampler_repository;
pub mod scenario_repository;
pub mod simulator_repository;
pub mod task_repository;

mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, info};

pub use av_repository::{Av, AvFields, AvRepository};
pub use error::{Result, StoreError};
pub use map_repository::{Map, MapFields, MapRepository};
pub use plan_repository::{Plan, PlanFields, PlanRepository, PlanRow};
pub use sampler_repository::{Sampler, SamplerFields, SamplerRepository};
pub use scenario_repository::{Scenario, ScenarioFields, ScenarioRepository};
pub use simulator_repository::{Simulator, SimulatorFields, SimulatorRepository};
pub use task_repository::{Task, TaskFields, TaskRepository, TaskRow, TaskStatus};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Parse a database location as given in `DB_URL`.
    ///
    /// Accepts a plain path, `sqlite://<path>`, `sqlite:<path>` or
    /// `file:<path>`. Other URL schemes are rejected.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StoreError::Open {
                location: String::new(),
                reason: "no database location given".to_string(),
            });
        }

        for prefix in ["sqlite://", "sqlite:", "file:"] {
            if let Some(path) = url.strip_prefix(prefix) {
                return Ok(Self::new(path));
            }
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(StoreError::Open {
                location: url.to_string(),
                reason: format!("unsupported database scheme '{scheme}'"),
            });
        }

        Ok(Self::new(url))
    }
}

/// Shared database handle.
pub struct Db {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Db {
    /// Open (or create) the database file described by `config`.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = Connection::open(&config.path).map_err(|err| StoreError::Open {
            location: config.path.display().to_string(),
            reason: err.to_string(),
        })?;
        conn.busy_timeout(config.busy_timeout)?;
        Self::configure(&conn)?;

        info!(path = %config.path.display(), "Opened database");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(config.path.clone()),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|err| StoreError::Open {
            location: ":memory:".to_string(),
            reason: err.to_string(),
        })?;
        Self::configure(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    fn configure(conn: &Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    }

    /// File backing this database; `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create every table that does not exist yet.
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(schema::SCHEMA)?;
        debug!("Schema up to date");
        Ok(())
    }

    /// Lock the connection.
    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").field("path", &self.path).finish()
    }
}

/// Map "no row changed" to [`StoreError::NotFound`].
pub(crate) fn expect_changed(changed: usize, table: &'static str, id: i64) -> Result<()> {
    if changed == 0 {
        return Err(StoreError::NotFound { table, id });
    }
    Ok(())
}

/// Empty text becomes SQL NULL for optional columns.
pub(crate) fn nullable(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
