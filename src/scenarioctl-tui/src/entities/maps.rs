//! Maps page.

use std::sync::Arc;

use scenarioctl_components::form::FieldDefinition;
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{Db, MapFields, MapRepository};
use tracing::info;

use super::{expect_values, handler, optional, parse_id, row};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 4] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Name", 20),
    TableColumn::new("XODR Path", 30),
    TableColumn::new("OSM Path", 30),
];

pub struct MapTable {
    db: Arc<Db>,
}

impl MapTable {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }
}

fn fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::text("Name"),
        FieldDefinition::text("XODR Path"),
        FieldDefinition::text("OSM Path"),
    ]
}

fn parse(values: &[String]) -> Result<MapFields, CrudError> {
    let [name, xodr_path, osm_path] = expect_values::<3>(values)?;
    Ok(MapFields {
        name: name.clone(),
        xodr_path: optional(xodr_path),
        osm_path: optional(osm_path),
    })
}

impl RecordSource for MapTable {
    fn title(&self) -> &str {
        "Maps"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let maps = MapRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        maps.into_iter()
            .map(|map| {
                row(vec![
                    map.id.to_string(),
                    map.name,
                    map.xodr_path.unwrap_or_default(),
                    map.osm_path.unwrap_or_default(),
                ])
            })
            .collect()
    }
}

impl RecordMutator for MapTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let on_submit = handler(&self.db, |db, values| {
            let id = MapRepository::new(db)
                .create(&parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created map");
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
            MapRepository::new(db)
                .update(id, &parse(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Updated map");
            Ok(())
        });
        form.enter_form_mode(fields(), Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        MapRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted map");
        Ok(())
    }
}
