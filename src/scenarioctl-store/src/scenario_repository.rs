//! Scenario repository - persistence for the `scenario` table.

use rusqlite::params;

use crate::error::require;
use crate::{Db, Result, expect_changed, nullable};

/// A scenario description file with optional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub scenario_path: String,
    pub param_path: Option<String>,
}

impl Scenario {
    /// Title if set, otherwise the scenario path.
    pub fn display_name(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.scenario_path,
        }
    }
}

/// Writable columns of a scenario. Empty optional text is stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub scenario_path: String,
    pub param_path: Option<String>,
}

fn scan_scenario(row: &rusqlite::Row) -> rusqlite::Result<Scenario> {
    Ok(Scenario {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        scenario_path: row.get(3)?,
        param_path: row.get(4)?,
    })
}

/// Repository for the `scenario` table.
pub struct ScenarioRepository<'a> {
    db: &'a Db,
}

impl<'a> ScenarioRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Scenario>> {
        let conn = self.db.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, scenario_path, param_path
             FROM scenario
             ORDER BY id",
        )?;
        let rows = stmt.query_map([], scan_scenario)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn create(&self, fields: &ScenarioFields) -> Result<i64> {
        require("scenario path", &fields.scenario_path)?;
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO scenario (title, description, scenario_path, param_path)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                nullable(fields.title.as_deref()),
                nullable(fields.description.as_deref()),
                fields.scenario_path,
                nullable(fields.param_path.as_deref()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &ScenarioFields) -> Result<()> {
        require("scenario path", &fields.scenario_path)?;
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE scenario
             SET title = ?1, description = ?2, scenario_path = ?3, param_path = ?4
             WHERE id = ?5",
            params![
                nullable(fields.title.as_deref()),
                nullable(fields.description.as_deref()),
                fields.scenario_path,
                nullable(fields.param_path.as_deref()),
                id,
            ],
        )?;
        expect_changed(changed, "scenario", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM scenario WHERE id = ?1", params![id])?;
        expect_changed(changed, "scenario", id)
    }
}
