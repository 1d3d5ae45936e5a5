//! Record vocabulary shared by forms and record pages.
//!
//! A row is a list of display strings whose first cell is the record's
//! identifier. [`RowSnapshot`] makes that a checked invariant: a row without
//! an identifier never reaches a page.

use std::fmt;

use thiserror::Error;

use crate::form::FieldError;

/// Errors building a [`RowSnapshot`] or [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has no identifier")]
    MissingIdentifier,
}

/// Errors raised by create/update/delete callbacks and submit handlers.
///
/// Every variant is shown to the operator as the page error line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrudError {
    /// The row identifier could not be interpreted by the backing store.
    #[error("invalid record identifier '{0}'")]
    InvalidIdentifier(String),

    /// A form value could not be interpreted.
    #[error("{0}")]
    InvalidInput(String),

    /// The submitted value list does not match the form.
    #[error("expected {expected} values, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Row(#[from] RowError),

    /// The backing store rejected the operation.
    #[error("{0}")]
    Backend(String),
}

impl CrudError {
    /// Wrap any backend error, keeping its message.
    pub fn backend(err: impl fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Durable identifier of a record; the first cell of its row. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Result<Self, RowError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RowError::MissingIdentifier);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One displayed row: `cells[0]` is the identifier, the rest are columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    id: RecordId,
    cells: Vec<String>,
}

impl RowSnapshot {
    /// Build a row from its display cells. Fails when cell 0 is missing or blank.
    pub fn new(cells: Vec<String>) -> Result<Self, RowError> {
        let first = cells.first().ok_or(RowError::MissingIdentifier)?;
        let id = RecordId::new(first.clone())?;
        Ok(Self { id, cells })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// All cells including the identifier.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Runs a form submission against the backing store.
///
/// Implemented for any `Fn(&[String]) -> Result<(), CrudError>` closure.
pub trait SubmitHandler: Send + Sync {
    fn submit(&self, values: &[String]) -> Result<(), CrudError>;
}

impl<F> SubmitHandler for F
where
    F: Fn(&[String]) -> Result<(), CrudError> + Send + Sync,
{
    fn submit(&self, values: &[String]) -> Result<(), CrudError> {
        self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_row_snapshot_keeps_cells() {
        let row = RowSnapshot::new(cells(&["7", "Town01", "/maps/town01.xodr"])).unwrap();
        assert_eq!(row.id().as_str(), "7");
        assert_eq!(row.len(), 3);
        assert_eq!(row.cell(1), Some("Town01"));
        assert_eq!(row.cell(3), None);
    }

    #[test]
    fn test_row_snapshot_rejects_missing_identifier() {
        assert_eq!(RowSnapshot::new(Vec::new()), Err(RowError::MissingIdentifier));
        assert_eq!(
            RowSnapshot::new(cells(&["  ", "Town01"])),
            Err(RowError::MissingIdentifier)
        );
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new("42").unwrap();
        assert_eq!(id.to_string(), "42");
        assert!(RecordId::new("").is_err());
    }

    #[test]
    fn test_closure_submit_handler() {
        let handler = |values: &[String]| {
            if values.is_empty() {
                Err(CrudError::InvalidInput("nothing to save".to_string()))
            } else {
                Ok(())
            }
        };

        assert!(handler.submit(&cells(&["a"])).is_ok());
        assert_eq!(
            handler.submit(&[]).unwrap_err().to_string(),
            "nothing to save"
        );
    }

    #[test]
    fn test_crud_error_messages() {
        assert_eq!(
            CrudError::InvalidIdentifier("abc".to_string()).to_string(),
            "invalid record identifier 'abc'"
        );
        assert_eq!(
            CrudError::backend("FOREIGN KEY constraint failed").to_string(),
            "FOREIGN KEY constraint failed"
        );
    }
}
