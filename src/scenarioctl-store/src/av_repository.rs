//! AV repository - persistence for the `av` table.

use rusqlite::params;

use crate::error::require;
use crate::{Db, Result, expect_changed};

/// An autonomous-vehicle stack packaged as a container image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Av {
    pub id: i64,
    pub name: String,
    pub image_path: String,
    pub config_path: String,
    pub nv_runtime: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvFields {
    pub name: String,
    pub image_path: String,
    pub config_path: String,
    pub nv_runtime: bool,
}

fn scan_av(row: &rusqlite::Row) -> rusqlite::Result<Av> {
    Ok(Av {
        id: row.get(0)?,
        name: row.get(1)?,
        image_path: row.get(2)?,
        config_path: row.get(3)?,
        nv_runtime: row.get(4)?,
    })
}

/// Repository for the `av` table.
pub struct AvRepository<'a> {
    db: &'a Db,
}

impl<'a> AvRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Av>> {
        let conn = self.db.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, name, image_path, config_path, nv_runtime FROM av ORDER BY id")?;
        let rows = stmt.query_map([], scan_av)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn create(&self, fields: &AvFields) -> Result<i64> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO av (name, image_path, config_path, nv_runtime) VALUES (?1, ?2, ?3, ?4)",
            params![
                fields.name,
                fields.image_path,
                fields.config_path,
                fields.nv_runtime,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &AvFields) -> Result<()> {
        require("name", &fields.name)?;
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE av SET name = ?1, image_path = ?2, config_path = ?3, nv_runtime = ?4
             WHERE id = ?5",
            params![
                fields.name,
                fields.image_path,
                fields.config_path,
                fields.nv_runtime,
                id,
            ],
        )?;
        expect_changed(changed, "av", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM av WHERE id = ?1", params![id])?;
        expect_changed(changed, "av", id)
    }
}
