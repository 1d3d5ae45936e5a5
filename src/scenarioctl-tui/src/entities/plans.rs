//! Plans page. A plan pairs a map with a scenario; both are picked from
//! the existing rows.

use std::sync::Arc;

use scenarioctl_components::form::{FieldDefinition, SelectOption};
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{Db, MapRepository, PlanFields, PlanRepository, ScenarioRepository};
use tracing::info;

use super::{expect_values, handler, parse_id, parse_number, row};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 4] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Name", 20),
    TableColumn::new("Map", 20),
    TableColumn::new("Scenario", 30),
];

pub struct PlanTable {
    db: Arc<Db>,
}

impl PlanTable {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    /// Name, then the map and scenario choices built from the store.
    fn fields(&self) -> Result<Vec<FieldDefinition>, CrudError> {
        let maps = MapRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?
            .into_iter()
            .map(|map| SelectOption::new(map.name, map.id.to_string()))
            .collect();
        let scenarios = ScenarioRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?
            .into_iter()
            .map(|scenario| SelectOption::new(scenario.display_name(), scenario.id.to_string()))
            .collect();

        Ok(vec![
            FieldDefinition::text("Name"),
            FieldDefinition::choice("Map", maps)?,
            FieldDefinition::choice("Scenario", scenarios)?,
        ])
    }
}

fn parse(values: &[String]) -> Result<PlanFields, CrudError> {
    let [name, map_id, scenario_id] = expect_values::<3>(values)?;
    Ok(PlanFields {
        name: name.clone(),
        map_id: parse_number("Map", map_id)?,
        scenario_id: parse_number("Scenario", scenario_id)?,
    })
}

impl RecordSource for PlanTable {
    fn title(&self) -> &str {
        "Plans"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let plans = PlanRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        plans
            .into_iter()
            .map(|plan| row(vec![plan.id.to_string(), plan.name, plan.map, plan.scenario]))
            .collect()
    }
}

impl RecordMutator for PlanTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let fields = self.fields()?;
        let on_submit = handler(&self.db, |db, values| {
            let id = PlanRepository::new(db)
                .create(&parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created plan");
            Ok(())
        });
        form.enter_form_mode(fields, None, on_submit);
        Ok(())
    }

    fn update(
        &self,
        _position: usize,
        row: &RowSnapshot,
        form: &mut FormSlot,
    ) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        let fields = self.fields()?;
        let on_submit = handler(&self.db, move |db, values| {
            PlanRepository::new(db)
                .update(id, &parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Updated plan");
            Ok(())
        });
        form.enter_form_mode(fields, Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        PlanRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted plan");
        Ok(())
    }
}
