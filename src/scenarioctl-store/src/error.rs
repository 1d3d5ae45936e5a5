//! Error types for scenarioctl-store.

use thiserror::Error;

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened.
    #[error("cannot open database '{location}': {reason}")]
    Open { location: String, reason: String },

    /// SQLite rejected a statement.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Input rejected before reaching SQLite.
    #[error("{0}")]
    Validation(String),

    /// Update or delete addressed a row that does not exist.
    #[error("{table} {id} not found")]
    NotFound { table: &'static str, id: i64 },

    /// A thread panicked while holding the connection.
    #[error("database connection lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Reject blank required text.
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}
