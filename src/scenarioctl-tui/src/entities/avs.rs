//! AVs page.

use std::sync::Arc;

use scenarioctl_components::form::FieldDefinition;
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{AvFields, AvRepository, Db};
use tracing::info;

use super::{expect_values, handler, parse_flag, parse_id, row, runtime_options};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 5] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Name", 15),
    TableColumn::new("Image Path", 25),
    TableColumn::new("Config Path", 25),
    TableColumn::new("NV Runtime", 12),
];

pub struct AvTable {
    db: Arc<Db>,
}

impl AvTable {
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

fn parse(values: &[String]) -> Result<AvFields, CrudError> {
    let [name, image_path, config_path, nv_runtime] = expect_values::<4>(values)?;
    Ok(AvFields {
        name: name.clone(),
        image_path: image_path.clone(),
        config_path: config_path.clone(),
        nv_runtime: parse_flag("NV Runtime", nv_runtime)?,
    })
}

impl RecordSource for AvTable {
    fn title(&self) -> &str {
        "AVs"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let avs = AvRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        avs.into_iter()
            .map(|av| {
                row(vec![
                    av.id.to_string(),
                    av.name,
                    av.image_path,
                    av.config_path,
                    av.nv_runtime.to_string(),
                ])
            })
            .collect()
    }
}

impl RecordMutator for AvTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let on_submit = handler(&self.db, |db, values| {
            let id = AvRepository::new(db)
                .create(&parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created AV");
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
            AvRepository::new(db)
                .update(id, &parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Updated AV");
            Ok(())
        });
        form.enter_form_mode(fields()?, Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        AvRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted AV");
        Ok(())
    }
}
