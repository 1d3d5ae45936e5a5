//! Entity pages wired to the store.
//!
//! Each table type implements both [`RecordSource`] and [`RecordMutator`]
//! over a shared [`Db`]. Rows are display strings with the numeric id in
//! column 0; mutators parse it back with [`parse_id`].

mod avs;
mod maps;
mod plans;
mod samplers;
mod scenarios;
mod simulators;
mod tasks;

use std::sync::Arc;

use scenarioctl_components::form::SelectOption;
use scenarioctl_components::record::{CrudError, RecordId, RowSnapshot, SubmitHandler};
use scenarioctl_store::Db;

use crate::app::NavEntry;
use crate::page::{RecordMutator, RecordPage, RecordSource};

pub use avs::AvTable;
pub use maps::MapTable;
pub use plans::PlanTable;
pub use samplers::SamplerTable;
pub use scenarios::ScenarioTable;
pub use simulators::SimulatorTable;
pub use tasks::{TaskTable, status_options};

/// The table list, in display order.
pub fn nav_entries(db: Arc<Db>) -> Vec<NavEntry> {
    vec![
        entry("Tasks", &db, TaskTable::new),
        entry("Plans", &db, PlanTable::new),
        entry("AVs", &db, AvTable::new),
        entry("Simulators", &db, SimulatorTable::new),
        entry("Scenarios", &db, ScenarioTable::new),
        entry("Maps", &db, MapTable::new),
        entry("Samplers", &db, SamplerTable::new),
    ]
}

fn entry<T>(name: &'static str, db: &Arc<Db>, build: fn(Arc<Db>) -> T) -> NavEntry
where
    T: RecordSource + RecordMutator + 'static,
{
    let db = Arc::clone(db);
    NavEntry::new(name, move |generation| {
        let table = Arc::new(build(Arc::clone(&db)));
        RecordPage::new(table.clone(), Some(table), generation)
    })
}

/// Submit handler running `save` against the store.
pub(crate) fn handler<F>(db: &Arc<Db>, save: F) -> Arc<dyn SubmitHandler>
where
    F: Fn(&Db, &[String]) -> Result<(), CrudError> + Send + Sync + 'static,
{
    let db = Arc::clone(db);
    Arc::new(move |values: &[String]| save(db.as_ref(), values))
}

pub(crate) fn parse_id(id: &RecordId) -> Result<i64, CrudError> {
    id.as_str()
        .trim()
        .parse()
        .map_err(|_| CrudError::InvalidIdentifier(id.to_string()))
}

/// Parse a numeric form value such as a choice id or a worker id.
pub(crate) fn parse_number(label: &str, value: &str) -> Result<i64, CrudError> {
    value
        .trim()
        .parse()
        .map_err(|_| CrudError::InvalidInput(format!("{label} must be a number, got '{value}'")))
}

pub(crate) fn parse_flag(label: &str, value: &str) -> Result<bool, CrudError> {
    value
        .trim()
        .parse()
        .map_err(|_| CrudError::InvalidInput(format!("{label} must be true or false, got '{value}'")))
}

/// Empty text means "not set".
pub(crate) fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check the submitted value count against the form's field count.
pub(crate) fn expect_values<const N: usize>(values: &[String]) -> Result<&[String; N], CrudError> {
    values.try_into().map_err(|_| CrudError::FieldCount {
        expected: N,
        actual: values.len(),
    })
}

pub(crate) fn row(cells: Vec<String>) -> Result<RowSnapshot, CrudError> {
    Ok(RowSnapshot::new(cells)?)
}

/// `false` / `true` choice for the NV runtime flag.
pub(crate) fn runtime_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("false", "false"),
        SelectOption::new("true", "true"),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(&RecordId::new("42").unwrap()), Ok(42));
        assert_eq!(
            parse_id(&RecordId::new("abc").unwrap()),
            Err(CrudError::InvalidIdentifier("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_number_message() {
        let err = parse_number("Worker ID", "seven").unwrap_err();
        assert_eq!(err.to_string(), "Worker ID must be a number, got 'seven'");
        assert_eq!(parse_number("Worker ID", " 7 "), Ok(7));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("NV Runtime", "true"), Ok(true));
        assert!(parse_flag("NV Runtime", "yes").is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional(""), None);
        assert_eq!(optional("  "), None);
        assert_eq!(optional("/maps/a.osm"), Some("/maps/a.osm".to_string()));
    }

    #[test]
    fn test_expect_values_counts() {
        let values = vec!["a".to_string(), "b".to_string()];
        let [first, second] = expect_values::<2>(&values).unwrap();
        assert_eq!((first.as_str(), second.as_str()), ("a", "b"));
        assert_eq!(
            expect_values::<3>(&values),
            Err(CrudError::FieldCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_nav_entries_order() {
        let db = Arc::new(Db::open_in_memory().unwrap());
        let names: Vec<String> = nav_entries(db)
            .iter()
            .map(|entry| entry.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Tasks", "Plans", "AVs", "Simulators", "Scenarios", "Maps", "Samplers"]
        );
    }
}
