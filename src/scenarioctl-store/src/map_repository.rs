//! Map repository - persistence for the `map` table.

use rusqlite::params;

use crate::error::require;
use crate::{Db, Result, expect_changed, nullable};

/// A road network a plan runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub id: i64,
    pub name: String,
    pub xodr_path: Option<String>,
    pub osm_path: Option<String>,
}

/// Writable columns of a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapFields {
    pub name: String,
    pub xodr_path: Option<String>,
    pub osm_path: Option<String>,
}

impl MapFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

fn scan_map(row: &rusqlite::Row) -> rusqlite::Result<Map> {
    Ok(Map {
        id: row.get(0)?,
        name: row.get(1)?,
        xodr_path: row.get(2)?,
        osm_path: row.get(3)?,
    })
}

/// Repository for the `map` table.
pub struct MapRepository<'a> {
    db: &'a Db,
}

impl<'a> MapRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Map>> {
        let conn = self.db.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, xodr_path, osm_path FROM map ORDER BY id")?;
        let rows = stmt.query_map([], scan_map)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Insert a map and return its id.
    pub fn create(&self, fields: &MapFields) -> Result<i64> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO map (name, xodr_path, osm_path) VALUES (?1, ?2, ?3)",
            params![
                fields.name,
                nullable(fields.xodr_path.as_deref()),
                nullable(fields.osm_path.as_deref()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &MapFields) -> Result<()> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE map SET name = ?1, xodr_path = ?2, osm_path = ?3 WHERE id = ?4",
            params![
                fields.name,
                nullable(fields.xodr_path.as_deref()),
                nullable(fields.osm_path.as_deref()),
                id,
            ],
        )?;
        expect_changed(changed, "map", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM map WHERE id = ?1", params![id])?;
        expect_changed(changed, "map", id)
    }
}
