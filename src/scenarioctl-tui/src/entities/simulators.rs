//! Simulators page. Same shape as the AVs page.

use std::sync::Arc;

use scenarioctl_components::form::FieldDefinition;
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{Db, SimulatorFields, SimulatorRepository};
use tracing::info;

use super::{expect_values, handler, parse_flag, parse_id, row, runtime_options};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 5] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Name", 20),
    TableColumn::new("Image Path", 25),
    TableColumn::new("Config Path", 25),
    TableColumn::new("NV Runtime", 12),
];

pub struct SimulatorTable {
    db: Arc<Db>,
}

impl SimulatorTable {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

fn fields() -> Result<Vec<FieldDefinition>, CrudError> {
    Ok(vec![
        FieldDefinition::text("Name"),
        FieldDefinition::text("Image Path"),
        FieldDefinition::text("Config Path"),
        FieldDefinition::choice("NV Runtime", runtime_options())?,
    ])
}

fn parse(values: &[String]) -> Result<SimulatorFields, CrudError> {
    let [name, image_path, config_path, nv_runtime] = expect_values::<4>(values)?;
    Ok(SimulatorFields {
        name: name.clone(),
        image_path: image_path.clone(),
        config_path: config_path.clone(),
        nv_runtime: parse_flag("NV Runtime", nv_runtime)?,
    })
}

impl RecordSource for SimulatorTable {
    fn title(&self) -> &str {
        "Simulators"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let simulators = SimulatorRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        simulators
            .into_iter()
            .map(|simulator| {
                row(vec![
                    simulator.id.to_string(),
                    simulator.name,
                    simulator.image_path,
                    simulator.config_path,
                    simulator.nv_runtime.to_string(),
                ])
            })
            .collect()
    }
}

impl RecordMutator for SimulatorTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let on_submit = handler(&self.db, |db, values| {
            let id = SimulatorRepository::new(db)
                .create(&parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created simulator");
            Ok(())
        });
        form.enter_form_mode(fields()?, None, on_submit);
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
            SimulatorRepository::new(db)
                .update(id, &parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Updated simulator");
            Ok(())
        });
        form.enter_form_mode(fields()?, Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        SimulatorRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted simulator");
        Ok(())
    }
}
