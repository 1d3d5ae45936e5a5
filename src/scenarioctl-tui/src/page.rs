//! Record page - one entity's loaded rows and, optionally, an open form.
//!
//! The page is a plain state machine. It never touches the store itself:
//! loads and submissions leave as [`PageCommand`]s and come back through
//! [`RecordPage::rows_loaded`] and [`RecordPage::submit_completed`].
//!
//! ```text
//!            n / e (callback opened a form)
//!   ┌──────┐ ─────────────────────────────▶ ┌──────────────┐
//!   │ View │                                │ Create/Edit  │
//!   └──────┘ ◀───────────────────────────── └──────────────┘
//!        Esc, or submit completed successfully (reload)
//! ```

use std::sync::Arc;

use scenarioctl_components::form::{Cycle, FieldDefinition, FormState, Submission};
use scenarioctl_components::table::TableColumn;
use scenarioctl_core::Action;
use tracing::{debug, error, warn};

pub use scenarioctl_components::record::{CrudError, RecordId, RowSnapshot, SubmitHandler};

/// Rows skipped by PageUp / PageDown.
pub const PAGE_STEP: usize = 10;

/// Where a page's rows come from.
pub trait RecordSource: Send + Sync {
    /// Name shown above the table.
    fn title(&self) -> &str;

    fn columns(&self) -> &[TableColumn];

    /// Fetch every row. Called on a blocking worker thread.
    fn load(&self) -> Result<Vec<RowSnapshot>, CrudError>;
}

/// Create, update and delete for one entity.
///
/// `create` and `update` start a form flow by calling
/// [`FormSlot::enter_form_mode`]; returning `Ok` without doing so leaves the
/// page in view mode. An error is shown on the page and no form opens.
pub trait RecordMutator: Send + Sync {
    fn create(&self, form: &mut FormSlot) -> Result<(), CrudError>;

    fn update(
        &self,
        position: usize,
        row: &RowSnapshot,
        form: &mut FormSlot,
    ) -> Result<(), CrudError>;

    fn delete(&self, position: usize, row: &RowSnapshot) -> Result<(), CrudError>;
}

/// The form a mutator callback may open.
#[derive(Default)]
pub struct FormSlot {
    form: Option<FormState>,
}

impl FormSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a form with the given fields. `subject` is the record being
    /// edited, `None` for a create form.
    pub fn enter_form_mode(
        &mut self,
        definitions: Vec<FieldDefinition>,
        subject: Option<RecordId>,
        on_submit: Arc<dyn SubmitHandler>,
    ) {
        self.form = Some(FormState::new(definitions, subject, on_submit));
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    fn into_form(self) -> Option<FormState> {
        self.form
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    View,
    Create,
    Edit,
}

/// Work the page asks its owner to run off the UI thread.
#[derive(Debug)]
pub enum PageCommand {
    /// Reload every row from the source.
    Load,
    /// Persist a form's values.
    Submit(Submission),
}

/// Rows, cursor and optional form of one entity.
pub struct RecordPage {
    source: Arc<dyn RecordSource>,
    mutator: Option<Arc<dyn RecordMutator>>,
    rows: Vec<RowSnapshot>,
    cursor: usize,
    form: Option<FormState>,
    last_error: Option<String>,
    generation: u64,
}

impl RecordPage {
    /// A page without a mutator is read-only: `n`, `e` and `d` do nothing.
    pub fn new(
        source: Arc<dyn RecordSource>,
        mutator: Option<Arc<dyn RecordMutator>>,
        generation: u64,
    ) -> Self {
        Self {
            source,
            mutator,
            rows: Vec::new(),
            cursor: 0,
            form: None,
            last_error: None,
            generation,
        }
    }

    pub fn title(&self) -> &str {
        self.source.title()
    }

    pub fn columns(&self) -> &[TableColumn] {
        self.source.columns()
    }

    pub fn source(&self) -> Arc<dyn RecordSource> {
        Arc::clone(&self.source)
    }

    pub fn rows(&self) -> &[RowSnapshot] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor without clamping. Edit and delete bounds-check it.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn selected_row(&self) -> Option<&RowSnapshot> {
        self.rows.get(self.cursor)
    }

    pub fn mode(&self) -> PageMode {
        match &self.form {
            None => PageMode::View,
            Some(form) if form.is_edit() => PageMode::Edit,
            Some(_) => PageMode::Create,
        }
    }

    pub fn is_in_form(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&FormState> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        self.form.as_mut()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Tag carried by this page's completion events.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// First load of a freshly opened page.
    pub fn init(&self) -> PageCommand {
        PageCommand::Load
    }

    /// Reload the rows. Also the retry path after a failed load.
    pub fn reload(&mut self) -> Option<PageCommand> {
        if self.is_in_form() {
            return None;
        }
        Some(PageCommand::Load)
    }

    /// Ask the mutator for a create form.
    pub fn new_record(&mut self) {
        if self.is_in_form() {
            return;
        }
        let Some(mutator) = self.mutator.clone() else {
            debug!(page = self.title(), "Page is read-only, ignoring new");
            return;
        };

        let mut slot = FormSlot::new();
        match mutator.create(&mut slot) {
            Ok(()) => self.open_form(slot, None),
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    /// Ask the mutator for an edit form for the selected row, then fill the
    /// form from that row.
    pub fn edit_selected(&mut self) {
        if self.is_in_form() {
            return;
        }
        let Some(mutator) = self.mutator.clone() else {
            debug!(page = self.title(), "Page is read-only, ignoring edit");
            return;
        };
        let Some(row) = self.selected_row().cloned() else {
            self.last_error = Some("No row selected for editing".to_string());
            return;
        };

        let mut slot = FormSlot::new();
        match mutator.update(self.cursor, &row, &mut slot) {
            Ok(()) => self.open_form(slot, Some(&row)),
            Err(err) => self.last_error = Some(err.to_string()),
        }
    }

    /// Delete the selected row and reload on success.
    pub fn delete_selected(&mut self) -> Option<PageCommand> {
        if self.is_in_form() {
            return None;
        }
        let Some(mutator) = self.mutator.clone() else {
            debug!(page = self.title(), "Page is read-only, ignoring delete");
            return None;
        };
        let Some(row) = self.selected_row() else {
            self.last_error = Some("No row selected for deletion".to_string());
            return None;
        };

        match mutator.delete(self.cursor, row) {
            Ok(()) => {
                self.last_error = None;
                Some(PageCommand::Load)
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    /// Drop the open form without saving.
    ///
    /// Refused while a submission is in flight: its outcome belongs to this form.
    pub fn cancel_form(&mut self) {
        if self.form.as_ref().is_some_and(FormState::is_pending) {
            debug!(page = self.source.title(), "Submit in flight, ignoring cancel");
            return;
        }
        if self.form.take().is_some() {
            self.last_error = None;
        }
    }

    /// Capture the form's values for submission.
    ///
    /// Returns `None` while an earlier submission is still in flight.
    pub fn submit_form(&mut self) -> Option<PageCommand> {
        let form = self.form.as_mut()?;
        if form.is_pending() {
            debug!(page = self.source.title(), "Submit already in flight, ignoring");
            return None;
        }
        form.set_pending(true);
        Some(PageCommand::Submit(form.submission()))
    }

    /// Outcome of a submission. Success closes the form and reloads; failure
    /// keeps the form and its values so the operator can fix them.
    ///
    /// Dropped unless the open form has a submission in flight.
    pub fn submit_completed(&mut self, result: Result<(), CrudError>) -> Option<PageCommand> {
        if !self.form.as_ref().is_some_and(FormState::is_pending) {
            debug!(page = self.source.title(), "No submission in flight, dropping outcome");
            return None;
        }
        match result {
            Ok(()) => {
                self.form = None;
                self.last_error = None;
                Some(PageCommand::Load)
            }
            Err(err) => {
                error!(page = self.source.title(), error = %err, "Submit failed");
                if let Some(form) = self.form.as_mut() {
                    form.set_pending(false);
                }
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    /// Outcome of a load. Rows are replaced wholesale; a failed load keeps
    /// the previous rows.
    pub fn rows_loaded(&mut self, result: Result<Vec<RowSnapshot>, CrudError>) {
        match result {
            Ok(rows) => {
                debug!(page = self.source.title(), rows = rows.len(), "Rows loaded");
                self.rows = rows;
                self.clamp_cursor();
            }
            Err(err) => {
                warn!(page = self.source.title(), error = %err, "Failed to load rows");
            }
        }
    }

    pub fn move_up(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.move_by(1);
    }

    pub fn page_up(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(PAGE_STEP);
    }

    pub fn page_down(&mut self) {
        self.move_by(PAGE_STEP);
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Apply a mapped key action.
    pub fn handle_action(&mut self, action: &Action) -> Option<PageCommand> {
        if self.is_in_form() {
            return self.handle_form_action(action);
        }

        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            Action::Top => self.move_to_top(),
            Action::Bottom => self.move_to_bottom(),
            Action::Reload => return self.reload(),
            Action::NewRecord => self.new_record(),
            Action::EditRecord => self.edit_selected(),
            Action::DeleteRecord => return self.delete_selected(),
            _ => {}
        }
        None
    }

    fn handle_form_action(&mut self, action: &Action) -> Option<PageCommand> {
        match action {
            Action::Select => return self.submit_form(),
            Action::Back => {
                self.cancel_form();
                return None;
            }
            _ => {}
        }

        let form = self.form.as_mut()?;
        match action {
            Action::FocusNext => form.focus_next(),
            Action::FocusPrev => form.focus_prev(),
            Action::ChoicePrev => {
                form.cycle_choice(Cycle::Prev);
            }
            Action::ChoiceNext => {
                form.cycle_choice(Cycle::Next);
            }
            Action::Input(input) => {
                form.type_into(input);
            }
            _ => {}
        }
        None
    }

    fn open_form(&mut self, slot: FormSlot, prefill: Option<&RowSnapshot>) {
        let Some(mut form) = slot.into_form() else {
            return;
        };
        if let Some(row) = prefill {
            form.prefill_from_row(row);
        }
        self.form = Some(form);
        self.last_error = None;
    }

    fn move_by(&mut self, step: usize) {
        self.clamp_cursor();
        let last = self.rows.len().saturating_sub(1);
        self.cursor = (self.cursor + step).min(last);
    }

    fn clamp_cursor(&mut self) {
        let last = self.rows.len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use scenarioctl_components::form::SelectOption;
    use scenarioctl_core::InputAction;

    use super::*;

    const COLUMNS: [TableColumn; 3] = [
        TableColumn::new("ID", 6),
        TableColumn::new("Status", 12),
        TableColumn::new("Name", 20),
    ];

    struct FakeSource;

    impl RecordSource for FakeSource {
        fn title(&self) -> &str {
            "Tasks"
        }

        fn columns(&self) -> &[TableColumn] {
            &COLUMNS
        }

        fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
            Ok(rows())
        }
    }

    #[derive(Default)]
    struct FakeMutator {
        calls: Mutex<Vec<String>>,
        submitted: Arc<Mutex<Vec<Vec<String>>>>,
        fail_create: bool,
        fail_delete: bool,
    }

    impl FakeMutator {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn definitions() -> Vec<FieldDefinition> {
            vec![
                FieldDefinition::choice(
                    "Status",
                    vec![
                        SelectOption::new("Pending", "pending"),
                        SelectOption::new("Failed", "failed"),
                    ],
                )
                .unwrap()
                .bound_to(1),
                FieldDefinition::text("Name").bound_to(2),
            ]
        }

        fn handler(&self) -> Arc<dyn SubmitHandler> {
            let submitted = Arc::clone(&self.submitted);
            Arc::new(move |values: &[String]| -> Result<(), CrudError> {
                submitted.lock().unwrap().push(values.to_vec());
                Ok(())
            })
        }
    }

    impl RecordMutator for FakeMutator {
        fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
            self.calls.lock().unwrap().push("create".to_string());
            if self.fail_create {
                return Err(CrudError::Backend("no plans yet".to_string()));
            }
            form.enter_form_mode(Self::definitions(), None, self.handler());
            Ok(())
        }

        fn update(
            &self,
            position: usize,
            row: &RowSnapshot,
            form: &mut FormSlot,
        ) -> Result<(), CrudError> {
            self.calls.lock().unwrap().push(format!("update {position}"));
            form.enter_form_mode(Self::definitions(), Some(row.id().clone()), self.handler());
            Ok(())
        }

        fn delete(&self, position: usize, row: &RowSnapshot) -> Result<(), CrudError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("delete {position} {}", row.id()));
            if self.fail_delete {
                return Err(CrudError::Backend("FOREIGN KEY constraint failed".to_string()));
            }
            Ok(())
        }
    }

    fn rows() -> Vec<RowSnapshot> {
        [["7", "Pending", "alpha"], ["42", "Failed", "beta"], ["9", "Pending", "gamma"]]
            .into_iter()
            .map(|cells| RowSnapshot::new(cells.iter().map(|c| c.to_string()).collect()).unwrap())
            .collect()
    }

    fn page_with(mutator: Arc<FakeMutator>) -> RecordPage {
        let mut page = RecordPage::new(Arc::new(FakeSource), Some(mutator), 1);
        page.rows_loaded(Ok(rows()));
        page
    }

    fn submission(command: Option<PageCommand>) -> Submission {
        match command {
            Some(PageCommand::Submit(submission)) => submission,
            other => panic!("expected submit command, got {other:?}"),
        }
    }

    #[test]
    fn test_init_requests_load() {
        let page = RecordPage::new(Arc::new(FakeSource), None, 3);
        assert!(matches!(page.init(), PageCommand::Load));
        assert_eq!(page.generation(), 3);
        assert_eq!(page.mode(), PageMode::View);
        assert_eq!(page.title(), "Tasks");
        assert_eq!(page.columns().len(), 3);
    }

    #[test]
    fn test_rows_loaded_clamps_cursor() {
        let mut page = page_with(Arc::default());
        page.set_cursor(2);

        page.rows_loaded(Ok(rows().into_iter().take(1).collect()));
        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.cursor(), 0);

        page.rows_loaded(Ok(Vec::new()));
        assert_eq!(page.cursor(), 0);
        assert!(page.selected_row().is_none());
    }

    #[test]
    fn test_failed_load_keeps_rows() {
        let mut page = page_with(Arc::default());
        page.rows_loaded(Err(CrudError::Backend("database is locked".to_string())));

        assert_eq!(page.rows().len(), 3);
        assert_eq!(page.last_error(), None);
    }

    #[test]
    fn test_delete_out_of_bounds_never_calls_back() {
        let mutator = Arc::new(FakeMutator::default());
        let mut page = page_with(Arc::clone(&mutator));
        page.set_cursor(5);

        assert!(page.delete_selected().is_none());
        assert!(mutator.calls().is_empty());
        assert_eq!(page.last_error(), Some("No row selected for deletion"));
        assert_eq!(page.mode(), PageMode::View);
    }

    #[test]
    fn test_edit_out_of_bounds_never_calls_back() {
        let mutator = Arc::new(FakeMutator::default());
        let mut page = RecordPage::new(Arc::new(FakeSource), Some(mutator.clone()), 1);

        page.edit_selected();
        assert!(mutator.calls().is_empty());
        assert_eq!(page.last_error(), Some("No row selected for editing"));
        assert_eq!(page.mode(), PageMode::View);
    }

    #[test]
    fn test_edit_prefills_choice_from_label() {
        let mutator = Arc::new(FakeMutator::default());
        let mut page = page_with(Arc::clone(&mutator));
        page.set_cursor(1);

        page.edit_selected();

        assert_eq!(mutator.calls(), vec!["update 1".to_string()]);
        assert_eq!(page.mode(), PageMode::Edit);
        let form = page.form().unwrap();
        assert_eq!(form.subject().map(RecordId::as_str), Some("42"));
        assert_eq!(form.fields()[0].selected(), Some(1));
        assert_eq!(form.fields()[0].text(), "Failed");
        assert_eq!(form.fields()[1].text(), "beta");
        assert_eq!(form.collect_values(), vec!["failed", "beta"]);
    }

    #[test]
    fn test_successful_submit_closes_form_and_reloads_once() {
        let mutator = Arc::new(FakeMutator::default());
        let mut page = page_with(Arc::clone(&mutator));

        page.handle_action(&Action::NewRecord);
        assert_eq!(page.mode(), PageMode::Create);

        page.handle_action(&Action::FocusNext);
        for c in "delta".chars() {
            page.handle_action(&Action::Input(InputAction::Char(c)));
        }
        let submission = submission(page.handle_action(&Action::Select));
        assert_eq!(submission.values(), ["pending", "delta"]);
        submission.run().unwrap();
        assert_eq!(mutator.submitted.lock().unwrap().len(), 1);

        let command = page.submit_completed(Ok(()));
        assert!(matches!(command, Some(PageCommand::Load)));
        assert_eq!(page.mode(), PageMode::View);
        assert!(page.form().is_none());
        assert_eq!(page.last_error(), None);
    }

    #[test]
    fn test_failed_submit_keeps_values_and_mode() {
        let mut page = page_with(Arc::default());
        page.set_cursor(1);
        page.edit_selected();
        page.handle_action(&Action::ChoicePrev);
        let before = page.form().unwrap().collect_values();

        let _ = submission(page.submit_form());
        let command =
            page.submit_completed(Err(CrudError::InvalidInput("Worker ID must be a number".into())));

        assert!(command.is_none());
        assert_eq!(page.mode(), PageMode::Edit);
        assert_eq!(page.form().unwrap().collect_values(), before);
        assert_eq!(page.last_error(), Some("Worker ID must be a number"));
        // The operator can retry
        assert!(page.submit_form().is_some());
    }

    #[test]
    fn test_second_enter_while_pending_is_ignored() {
        let mut page = page_with(Arc::default());
        page.new_record();

        assert!(page.handle_action(&Action::Select).is_some());
        assert!(page.handle_action(&Action::Select).is_none());
        assert!(page.form().unwrap().is_pending());
    }

    #[test]
    fn test_cancel_clears_error() {
        let mut page = page_with(Arc::default());
        page.new_record();
        let _ = page.submit_form();
        page.submit_completed(Err(CrudError::Backend("name is required".into())));

        page.handle_action(&Action::Back);
        assert_eq!(page.mode(), PageMode::View);
        assert_eq!(page.last_error(), None);
    }

    #[test]
    fn test_cancel_ignored_while_submit_in_flight() {
        let mut page = page_with(Arc::default());
        page.new_record();
        page.handle_action(&Action::FocusNext);
        page.handle_action(&Action::Input(InputAction::Char('a')));
        let _ = submission(page.submit_form());

        page.handle_action(&Action::Back);
        assert_eq!(page.mode(), PageMode::Create);
        assert!(page.form().unwrap().is_pending());

        // The outcome lands on the form that produced it
        assert!(matches!(page.submit_completed(Ok(())), Some(PageCommand::Load)));
        assert_eq!(page.mode(), PageMode::View);
    }

    #[test]
    fn test_outcome_without_pending_form_is_dropped() {
        let mut page = page_with(Arc::default());
        assert!(page.submit_completed(Ok(())).is_none());
        assert!(
            page.submit_completed(Err(CrudError::Backend("late".into())))
                .is_none()
        );
        assert_eq!(page.last_error(), None);

        page.new_record();
        page.handle_action(&Action::FocusNext);
        for c in "typed".chars() {
            page.handle_action(&Action::Input(InputAction::Char(c)));
        }

        assert!(page.submit_completed(Ok(())).is_none());
        assert_eq!(page.mode(), PageMode::Create);
        assert_eq!(page.form().unwrap().collect_values(), vec!["pending", "typed"]);
        assert_eq!(page.last_error(), None);
    }

    #[test]
    fn test_create_failure_stays_in_view() {
        let mutator = Arc::new(FakeMutator {
            fail_create: true,
            ..FakeMutator::default()
        });
        let mut page = page_with(mutator);

        page.new_record();
        assert_eq!(page.mode(), PageMode::View);
        assert_eq!(page.last_error(), Some("no plans yet"));
    }

    #[test]
    fn test_delete_reloads_on_success() {
        let mutator = Arc::new(FakeMutator::default());
        let mut page = page_with(Arc::clone(&mutator));
        page.set_cursor(2);

        let command = page.handle_action(&Action::DeleteRecord);
        assert!(matches!(command, Some(PageCommand::Load)));
        assert_eq!(mutator.calls(), vec!["delete 2 9".to_string()]);
    }

    #[test]
    fn test_delete_failure_is_shown() {
        let mutator = Arc::new(FakeMutator {
            fail_delete: true,
            ..FakeMutator::default()
        });
        let mut page = page_with(mutator);

        assert!(page.delete_selected().is_none());
        assert_eq!(page.last_error(), Some("FOREIGN KEY constraint failed"));
        assert_eq!(page.rows().len(), 3);
    }

    #[test]
    fn test_read_only_page_ignores_mutations() {
        let mut page = RecordPage::new(Arc::new(FakeSource), None, 1);
        page.rows_loaded(Ok(rows()));

        page.new_record();
        page.edit_selected();
        assert!(page.delete_selected().is_none());
        assert_eq!(page.mode(), PageMode::View);
        assert_eq!(page.last_error(), None);
    }

    #[test]
    fn test_reload_only_in_view() {
        let mut page = page_with(Arc::default());
        assert!(matches!(page.handle_action(&Action::Reload), Some(PageCommand::Load)));

        page.new_record();
        assert!(page.reload().is_none());
    }

    #[test]
    fn test_cursor_movement() {
        let mut page = page_with(Arc::default());

        page.handle_action(&Action::MoveDown);
        page.handle_action(&Action::MoveDown);
        page.handle_action(&Action::MoveDown);
        assert_eq!(page.cursor(), 2);

        page.handle_action(&Action::MoveUp);
        assert_eq!(page.cursor(), 1);

        page.handle_action(&Action::Top);
        assert_eq!(page.cursor(), 0);
        page.handle_action(&Action::PageDown);
        assert_eq!(page.cursor(), 2);
        page.handle_action(&Action::PageUp);
        assert_eq!(page.cursor(), 0);
        page.handle_action(&Action::Bottom);
        assert_eq!(page.cursor(), 2);
    }

    #[test]
    fn test_choice_keys_cycle_in_form() {
        let mut page = page_with(Arc::default());
        page.new_record();

        page.handle_action(&Action::ChoiceNext);
        assert_eq!(page.form().unwrap().collect_values()[0], "failed");
        page.handle_action(&Action::ChoiceNext);
        assert_eq!(page.form().unwrap().collect_values()[0], "pending");

        // Typing into a choice field is ignored
        page.handle_action(&Action::Input(InputAction::Char('x')));
        assert_eq!(page.form().unwrap().collect_values(), vec!["pending", ""]);
    }
}
