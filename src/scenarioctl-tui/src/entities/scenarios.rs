//! Scenarios page. Everything but the scenario path is optional.

use std::sync::Arc;

use scenarioctl_components::form::FieldDefinition;
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{Db, ScenarioFields, ScenarioRepository};
use tracing::info;

use super::{expect_values, handler, optional, parse_id, row};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 5] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Title", 20),
    TableColumn::new("Description", 30),
    TableColumn::new("Scenario Path", 30),
    TableColumn::new("Param Path", 30),
];

pub struct ScenarioTable {
    db: Arc<Db>,
}

impl ScenarioTable {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

fn fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::text("Title"),
        FieldDefinition::text("Description"),
        FieldDefinition::text("Scenario Path"),
        FieldDefinition::text("Param Path"),
    ]
}

fn parse(values: &[String]) -> Result<ScenarioFields, CrudError> {
    let [title, description, scenario_path, param_path] = expect_values::<4>(values)?;
    Ok(ScenarioFields {
        title: optional(title),
        description: optional(description),
        scenario_path: scenario_path.clone(),
        param_path: optional(param_path),
    })
}

impl RecordSource for ScenarioTable {
    fn title(&self) -> &str {
        "Scenarios"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let scenarios = ScenarioRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        scenarios
            .into_iter()
            .map(|scenario| {
                row(vec![
                    scenario.id.to_string(),
                    scenario.title.unwrap_or_default(),
                    scenario.description.unwrap_or_default(),
                    scenario.scenario_path,
                    scenario.param_path.unwrap_or_default(),
                ])
            })
            .collect()
    }
}

impl RecordMutator for ScenarioTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let on_submit = handler(&self.db, |db, values| {
            let id = ScenarioRepository::new(db)
                .create(&parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created scenario");
            Ok(())
        });
        form.enter_form_mode(fields(), None, on_submit);
        Ok(())
    }

    fn update(
        &self,
        _position: usize,
        row: &RowSnapshot,
        form: &mut FormSlot,
    ) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        let on_submit = handler(&self.db, move |db, values| {
            ScenarioRepository::new(db)
                .update(id, &parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Updated scenario");
            Ok(())
        });
        form.enter_form_mode(fields(), Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        ScenarioRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted scenario");
        Ok(())
    }
}
