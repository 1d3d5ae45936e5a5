//! Task repository - persistence for the `task` table.
//!
//! A task runs one plan with one AV, simulator and sampler. Workers pick up
//! pending tasks and move them through [`TaskStatus`].

use std::fmt;
use std::str::FromStr;

use rusqlite::params;

use crate::{Db, Result, StoreError, expect_changed};

/// Lifecycle of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Failed,
    ];

    /// Token stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
        }
    }

    /// Label for a stored token; unknown tokens are returned verbatim.
    pub fn label_for(token: &str) -> &str {
        match token.parse::<TaskStatus>() {
            Ok(status) => status.label(),
            Err(_) => token,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StoreError::Validation(format!("unknown task status '{s}'")))
    }
}

/// A stored task with its foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub plan_id: i64,
    pub av_id: i64,
    pub simulator_id: i64,
    pub sampler_id: i64,
    pub status: String,
    pub worker_id: Option<i64>,
}

/// A task joined with the names of what it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: i64,
    pub status: String,
    pub plan: String,
    pub av: String,
    pub simulator: String,
    pub sampler: String,
    pub worker_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub plan_id: i64,
    pub av_id: i64,
    pub simulator_id: i64,
    pub sampler_id: i64,
    pub status: TaskStatus,
    pub worker_id: Option<i64>,
}

fn scan_task_row(row: &rusqlite::Row) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get(0)?,
        status: row.get(1)?,
        plan: row.get(2)?,
        av: row.get(3)?,
        simulator: row.get(4)?,
        sampler: row.get(5)?,
        worker_id: row.get(6)?,
    })
}

fn scan_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        plan_id: row.get(1)?,
        av_id: row.get(2)?,
        simulator_id: row.get(3)?,
        sampler_id: row.get(4)?,
        status: row.get(5)?,
        worker_id: row.get(6)?,
    })
}

/// Repository for the `task` table.
pub struct TaskRepository<'a> {
    db: &'a Db,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Tasks with plan, AV, simulator and sampler names, newest first.
    pub fn list(&self) -> Result<Vec<TaskRow>> {
        let conn = self.db.conn()?;
        let mut stmt = conn.prepare(
            "SELECT t.id, t.status, p.name, a.name, s.name, sp.name, t.worker_id
             FROM task t
             JOIN plan p ON t.plan_id = p.id
             JOIN av a ON t.av_id = a.id
             JOIN simulator s ON t.simulator_id = s.id
             JOIN sampler sp ON t.sampler_id = sp.id
             ORDER BY t.id DESC",
        )?;
        let rows = stmt.query_map([], scan_task_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// One task by id, foreign keys included.
    pub fn get(&self, id: i64) -> Result<Task> {
        let conn = self.db.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, plan_id, av_id, simulator_id, sampler_id, status, worker_id
             FROM task WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], scan_task)?;
        match rows.next() {
            Some(task) => Ok(task?),
            None => Err(StoreError::NotFound { table: "task", id }),
        }
    }

    pub fn create(&self, fields: &TaskFields) -> Result<i64> {
        let conn = self.db.conn()?;
        conn.execute(
            "INSERT INTO task (plan_id, av_id, simulator_id, sampler_id, status, worker_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                fields.plan_id,
                fields.av_id,
                fields.simulator_id,
                fields.sampler_id,
                fields.status.as_str(),
                fields.worker_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(&self, id: i64, fields: &TaskFields) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute(
            "UPDATE task
             SET plan_id = ?1, av_id = ?2, simulator_id = ?3, sampler_id = ?4,
                 status = ?5, worker_id = ?6
             WHERE id = ?7",
            params![
                fields.plan_id,
                fields.av_id,
                fields.simulator_id,
                fields.sampler_id,
                fields.status.as_str(),
                fields.worker_id,
                id,
            ],
        )?;
        expect_changed(changed, "task", id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.db.conn()?;
        let changed = conn.execute("DELETE FROM task WHERE id = ?1", params![id])?;
        expect_changed(changed, "task", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("queued".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(TaskStatus::label_for("failed"), "Failed");
        assert_eq!(TaskStatus::label_for("archived"), "archived");
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }
}
