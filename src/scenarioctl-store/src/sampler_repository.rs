//! Sampler repository - persistence for the `sampler` table.

use rusqlite::params;

use crate::error::require;
use crate::{Db, Result, expect_changed, nullable};

/// A parameter sampler module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sampler {
    pub id: i64,
    pub name: String,
    pub module_path: String,
    pub config_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplerFields {
    pub name: String,
    pub module_path: String,
    pub config_path: Option<String>,
}

fn scan_sampler(row: &rusqlite::Row) -> rusqlite::Result<Sampler> {
    Ok(Sampler {
        id: row.get(0)?,
        name: row.get(1)?,
        module_path: row.get(2)?,
        config_path: row.get(3)?,
    })
}

/// Repository for the `sampler` table.
pub struct SamplerRepository<'a> {
    db: &'a Db,
}

impl<'a> SamplerRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Sampler>> {
        let conn = self.db.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, module_path, config_path FROM sampler ORDER BY id")?;
        let rows = stmt.query_map([], scan_sampler)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn create(&self, fields: &SamplerFields) -> Result<i64> {
        validate(fields)?;
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO sampler (name, module_path, config_path) VALUES (?1, ?2, ?3)",
            params![
                fields.name,
                fields.module_path,
                nullable(fields.config_path.as_deref()),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &SamplerFields) -> Result<()> {
        validate(fields)?;
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE sampler SET name = ?1, module_path = ?2, config_path = ?3 WHERE id = ?4",
            params![
                fields.name,
                fields.module_path,
                nullable(fields.config_path.as_deref()),
                id,
            ],
        )?;
        expect_changed(changed, "sampler", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM sampler WHERE id = ?1", params![id])?;
        expect_changed(changed, "sampler", id)
    }
}

fn validate(fields: &SamplerFields) -> Result<()> {
    require("name", &fields.name)?;
    require("module path", &fields.module_path)
}
