//! Completion events posted back to the event loop by background work.
//!
//! Every event carries the generation of the page that asked for the work.
//! The shell drops events whose generation no longer matches the active
//! page, so a slow load for a page the operator already left is ignored.

use scenarioctl_components::record::{CrudError, RowSnapshot};

#[derive(Debug)]
pub enum AppEvent {
    /// A `Load` command finished.
    RowsLoaded {
        generation: u64,
        result: Result<Vec<RowSnapshot>, CrudError>,
    },
    /// A `Submit` command finished.
    SubmitCompleted {
        generation: u64,
        result: Result<(), CrudError>,
    },
}

impl AppEvent {
    pub fn generation(&self) -> u64 {
        match self {
            AppEvent::RowsLoaded { generation, .. } | AppEvent::SubmitCompleted { generation, .. } => {
                *generation
            }
        }
    }
}
