//! Plan repository - persistence for the `plan` table.
//!
//! A plan pairs a map with a scenario. Listing joins both so the table can
//! show names instead of ids.

use rusqlite::params;

use crate::error::require;
use crate::{Db, Result, expect_changed};

/// A stored plan with its foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub map_id: i64,
    pub scenario_id: i64,
}

/// A plan joined with its map name and scenario title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub id: i64,
    pub name: String,
    pub map: String,
    pub scenario: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFields {
    pub name: String,
    pub map_id: i64,
    pub scenario_id: i64,
}

fn scan_plan_row(row: &rusqlite::Row) -> rusqlite::Result<PlanRow> {
    Ok(PlanRow {
        id: row.get(0)?,
        name: row.get(1)?,
        map: row.get(2)?,
        scenario: row.get(3)?,
    })
}

fn scan_plan(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get(0)?,
        name: row.get(1)?,
        map_id: row.get(2)?,
        scenario_id: row.get(3)?,
    })
}

/// Repository for the `plan` table.
pub struct PlanRepository<'a> {
    db: &'a Db,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Plans with map and scenario names, ordered by id.
    pub fn list(&self) -> Result<Vec<PlanRow>> {
        let conn = self.db.conn()?;
        let mut stmt = conn.prepare(
            "SELECT p.id, p.name, m.name, COALESCE(NULLIF(s.title, ''), s.scenario_path)
             FROM plan p
             JOIN map m ON p.map_id = m.id
             JOIN scenario s ON p.scenario_id = s.id
             ORDER BY p.id",
        )?;
        let rows = stmt.query_map([], scan_plan_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Plans without joins, for building choice lists.
    pub fn list_plain(&self) -> Result<Vec<Plan>> {
        let conn = self.db.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, map_id, scenario_id FROM plan ORDER BY id")?;
        let rows = stmt.query_map([], scan_plan)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn create(&self, fields: &PlanFields) -> Result<i64> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO plan (name, map_id, scenario_id) VALUES (?1, ?2, ?3)",
            params![fields.name, fields.map_id, fields.scenario_id],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &PlanFields) -> Result<()> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE plan SET name = ?1, map_id = ?2, scenario_id = ?3 WHERE id = ?4",
            params![fields.name, fields.map_id, fields.scenario_id, id],
        )?;
        expect_changed(changed, "plan", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM plan WHERE id = ?1", params![id])?;
        expect_changed(changed, "plan", id)
    }
}
