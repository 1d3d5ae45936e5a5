//! Samplers page.

use std::sync::Arc;

use scenarioctl_components::form::FieldDefinition;
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{Db, SamplerFields, SamplerRepository};
use tracing::info;

use super::{expect_values, handler, optional, parse_id, row};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 4] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Name", 20),
    TableColumn::new("Module Path", 30),
    TableColumn::new("Config Path", 30),
];

pub struct SamplerTable {
    db: Arc<Db>,
}

impl SamplerTable {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

fn fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::text("Name"),
        FieldDefinition::text("Module Path"),
        FieldDefinition::text("Config Path"),
    ]
}

fn parse(values: &[String]) -> Result<SamplerFields, CrudError> {
    let [name, module_path, config_path] = expect_values::<3>(values)?;
    Ok(SamplerFields {
        name: name.clone(),
        module_path: module_path.clone(),
        config_path: optional(config_path),
    })
}

impl RecordSource for SamplerTable {
    fn title(&self) -> &str {
        "Samplers"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let samplers = SamplerRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        samplers
            .into_iter()
            .map(|sampler| {
                row(vec![
                    sampler.id.to_string(),
                    sampler.name,
                    sampler.module_path,
                    sampler.config_path.unwrap_or_default(),
                ])
            })
            .collect()
    }
}

impl RecordMutator for SamplerTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let on_submit = handler(&self.db, |db, values| {
            let id = SamplerRepository::new(db)
                .create(&parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created sampler");
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
            SamplerRepository::new(db)
                .update(id, &parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Updated sampler");
            Ok(())
        });
        form.enter_form_mode(fields(), Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        SamplerRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted sampler");
        Ok(())
    }
}
