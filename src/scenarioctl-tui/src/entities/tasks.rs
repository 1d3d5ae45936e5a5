//! Tasks page.
//!
//! A new task starts `pending` with no worker; the edit form adds the status
//! and worker fields. Rows show the status label, so the status choice is
//! matched back by label when the edit form opens.

use std::sync::Arc;

use scenarioctl_components::form::{FieldDefinition, SelectOption};
use scenarioctl_components::record::{CrudError, RowSnapshot};
use scenarioctl_components::table::TableColumn;
use scenarioctl_store::{
    AvRepository, Db, PlanRepository, SamplerRepository, SimulatorRepository, TaskFields,
    TaskRepository, TaskStatus,
};
use tracing::info;

use super::{expect_values, handler, optional, parse_id, parse_number, row};
use crate::page::{FormSlot, RecordMutator, RecordSource};

const COLUMNS: [TableColumn; 7] = [
    TableColumn::new("ID", 6),
    TableColumn::new("Status", 12),
    TableColumn::new("Plan", 15),
    TableColumn::new("AV", 15),
    TableColumn::new("Simulator", 15),
    TableColumn::new("Sampler", 15),
    TableColumn::new("Worker ID", 10),
];

/// Status choices in lifecycle order, labelled for display.
pub fn status_options() -> Vec<SelectOption> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| SelectOption::new(status.label(), status.as_str()))
        .collect()
}

pub struct TaskTable {
    db: Arc<Db>,
}

impl TaskTable {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    /// Plan, AV, Simulator and Sampler choices, bound to their row columns.
    fn reference_fields(&self) -> Result<Vec<FieldDefinition>, CrudError> {
        let db: &Db = &self.db;
        let plans = PlanRepository::new(db)
            .list_plain()
            .map_err(CrudError::backend)?
            .into_iter()
            .map(|plan| SelectOption::new(plan.name, plan.id.to_string()))
            .collect();
        let avs = AvRepository::new(db)
            .list()
            .map_err(CrudError::backend)?
            .into_iter()
            .map(|av| SelectOption::new(av.name, av.id.to_string()))
            .collect();
        let simulators = SimulatorRepository::new(db)
            .list()
            .map_err(CrudError::backend)?
            .into_iter()
            .map(|simulator| SelectOption::new(simulator.name, simulator.id.to_string()))
            .collect();
        let samplers = SamplerRepository::new(db)
            .list()
            .map_err(CrudError::backend)?
            .into_iter()
            .map(|sampler| SelectOption::new(sampler.name, sampler.id.to_string()))
            .collect();

        Ok(vec![
            FieldDefinition::choice("Plan", plans)?.bound_to(2),
            FieldDefinition::choice("AV", avs)?.bound_to(3),
            FieldDefinition::choice("Simulator", simulators)?.bound_to(4),
            FieldDefinition::choice("Sampler", samplers)?.bound_to(5),
        ])
    }
}

fn parse_references(values: &[String; 4]) -> Result<TaskFields, CrudError> {
    let [plan_id, av_id, simulator_id, sampler_id] = values;
    Ok(TaskFields {
        plan_id: parse_number("Plan", plan_id)?,
        av_id: parse_number("AV", av_id)?,
        simulator_id: parse_number("Simulator", simulator_id)?,
        sampler_id: parse_number("Sampler", sampler_id)?,
        status: TaskStatus::Pending,
        worker_id: None,
    })
}

fn parse_create(values: &[String]) -> Result<TaskFields, CrudError> {
    parse_references(expect_values::<4>(values)?)
}

fn parse_update(values: &[String]) -> Result<TaskFields, CrudError> {
    let [plan_id, av_id, simulator_id, sampler_id, status, worker_id] =
        expect_values::<6>(values)?;
    let references = [
        plan_id.clone(),
        av_id.clone(),
        simulator_id.clone(),
        sampler_id.clone(),
    ];
    let status = status
        .parse::<TaskStatus>()
        .map_err(|err| CrudError::InvalidInput(err.to_string()))?;
    let worker_id = optional(worker_id)
        .map(|worker| parse_number("Worker ID", &worker))
        .transpose()?;

    Ok(TaskFields {
        status,
        worker_id,
        ..parse_references(&references)?
    })
}

impl RecordSource for TaskTable {
    fn title(&self) -> &str {
        "Tasks"
    }

    fn columns(&self) -> &[TableColumn] {
        &COLUMNS
    }

    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
        let tasks = TaskRepository::new(&self.db)
            .list()
            .map_err(CrudError::backend)?;
        tasks
            .into_iter()
            .map(|task| {
                row(vec![
                    task.id.to_string(),
                    TaskStatus::label_for(&task.status).to_string(),
                    task.plan,
                    task.av,
                    task.simulator,
                    task.sampler,
                    task.worker_id.map(|id| id.to_string()).unwrap_or_default(),
                ])
            })
            .collect()
    }
}

impl RecordMutator for TaskTable {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
        let fields = self.reference_fields()?;
        let on_submit = handler(&self.db, |db, values| {
            let id = TaskRepository::new(db)
                .create(&parse_create(values)?)
                .map_err(CrudError::backend)?;
            info!(id, "Created task");
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
        let mut fields = self.reference_fields()?;
        fields.push(FieldDefinition::choice("Status", status_options())?.bound_to(1));
        fields.push(FieldDefinition::text("Worker ID").bound_to(6));

        let on_submit = handler(&self.db, move |db, values| {
            let task = parse_update(values)?;
            TaskRepository::new(db)
                .update(id, &task)
                .map_err(CrudError::backend)?;
            info!(id, status = %task.status, "Updated task");
            Ok(())
        });
        form.enter_form_mode(fields, Some(row.id().clone()), on_submit);
        Ok(())
    }

    fn delete(&self, _position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
        let id = parse_id(row.id())?;
        TaskRepository::new(&self.db)
            .delete(id)
            .map_err(CrudError::backend)?;
        info!(id, "Deleted task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_status_options_use_labels_and_tokens() {
        let options = status_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[1], SelectOption::new("In Progress", "in_progress"));
    }

    #[test]
    fn test_parse_create_defaults() {
        let task = parse_create(&strings(&["1", "2", "3", "4"])).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.worker_id, None);
        assert_eq!(task.sampler_id, 4);
    }

    #[test]
    fn test_parse_update_worker() {
        let task = parse_update(&strings(&["1", "2", "3", "4", "failed", ""])).unwrap();
        assert_eq!(task.status, TaskStatus::Failed);
        assert_eq!(task.worker_id, None);

        let task = parse_update(&strings(&["1", "2", "3", "4", "completed", "12"])).unwrap();
        assert_eq!(task.worker_id, Some(12));

        let err = parse_update(&strings(&["1", "2", "3", "4", "pending", "w-1"])).unwrap_err();
        assert_eq!(err.to_string(), "Worker ID must be a number, got 'w-1'");
    }

    #[test]
    fn test_parse_update_rejects_unknown_status() {
        let err = parse_update(&strings(&["1", "2", "3", "4", "queued", ""])).unwrap_err();
        assert_eq!(err, CrudError::InvalidInput("unknown task status 'queued'".to_string()));
    }
}
