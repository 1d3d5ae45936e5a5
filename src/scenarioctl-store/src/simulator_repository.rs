//! Simulator repository - persistence for the `simulator` table.

use rusqlite::params;

use crate::error::require;
use crate::{Db, Result, expect_changed};

/// A driving simulator packaged as a container image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    pub id: i64,
    pub name: String,
    pub image_path: String,
    pub config_path: String,
    pub nv_runtime: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatorFields {
    pub name: String,
    pub image_path: String,
    pub config_path: String,
    pub nv_runtime: bool,
}

fn scan_simulator(row: &rusqlite::Row) -> rusqlite::Result<Simulator> {
    Ok(Simulator {
        id: row.get(0)?,
        name: row.get(1)?,
        image_path: row.get(2)?,
        config_path: row.get(3)?,
        nv_runtime: row.get(4)?,
    })
}

/// Repository for the `simulator` table.
pub struct SimulatorRepository<'a> {
    db: &'a Db,
}

impl<'a> SimulatorRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Simulator>> {
        let conn = self.db.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, name, image_path, config_path, nv_runtime FROM simulator ORDER BY id")?;
        let rows = stmt.query_map([], scan_simulator)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn create(&self, fields: &SimulatorFields) -> Result<i64> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO simulator (name, image_path, config_path, nv_runtime) VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.name,
                fields.image_path,
                fields.config_path,
                fields.nv_runtime,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &SimulatorFields) -> Result<()> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE simulator SET name = ?1, image_path = ?2, config_path = ?3, nv_runtime = ?4
             WHERE id = ?5",
            params![
                fields.name,
                fields.image_path,
                fields.config_path,
                fields.nv_runtime,
                id,
            ],
        )?;
        expect_changed(changed, "simulator", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM simulator WHERE id = ?1", params![id])?;
        expect_changed(changed, "simulator", id)
    }
}
