//! Application shell - the table list on the left and one record page.
//!
//! The shell decides where each key goes:
//!
//! | state | keys go to |
//! |---|---|
//! | page has a form open | the page (Esc cancels the form) |
//! | page focused | the page (Esc returns to the table list) |
//! | table list focused | the list (Enter opens the highlighted table) |
//!
//! Ctrl+C quits from every state.

use std::fmt;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use scenarioctl_components::focus::FocusManager;
use scenarioctl_components::form::Submission;
use scenarioctl_components::key_hints::{KeyHintsBar, common};
use scenarioctl_core::{Action, DefaultKeyMapper, InputAction, KeyContext, KeyMapper};
use thiserror::Error;
use tracing::{debug, info};

use crate::events::AppEvent;
use crate::page::{PageCommand, RecordPage, RecordSource};

/// Builds a fresh page for a generation.
pub type PageFactory = Arc<dyn Fn(u64) -> RecordPage + Send + Sync>;

/// One entry of the table list.
#[derive(Clone)]
pub struct NavEntry {
    name: String,
    factory: PageFactory,
}

impl NavEntry {
    pub fn new(
        name: impl Into<String>,
        factory: impl Fn(u64) -> RecordPage + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn open(&self, generation: u64) -> RecordPage {
        (self.factory)(generation)
    }
}

impl fmt::Debug for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no tables to show")]
    NoEntries,
}

/// Background work requested by the shell, tagged with the page generation.
pub enum AppCommand {
    Load {
        generation: u64,
        source: Arc<dyn RecordSource>,
    },
    Submit {
        generation: u64,
        submission: Submission,
    },
}

impl AppCommand {
    pub fn generation(&self) -> u64 {
        match self {
            AppCommand::Load { generation, .. } | AppCommand::Submit { generation, .. } => {
                *generation
            }
        }
    }
}

impl fmt::Debug for AppCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppCommand::Load { generation, source } => f
                .debug_struct("Load")
                .field("generation", generation)
                .field("source", &source.title())
                .finish(),
            AppCommand::Submit {
                generation,
                submission,
            } => f
                .debug_struct("Submit")
                .field("generation", generation)
                .field("submission", submission)
                .finish(),
        }
    }
}

/// Which half of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Page,
}

pub struct App {
    entries: Vec<NavEntry>,
    nav: FocusManager,
    page: RecordPage,
    focus: Focus,
    generation: u64,
    should_quit: bool,
    key_mapper: Box<dyn KeyMapper + Send + Sync>,
}

impl App {
    /// Open the first entry's page with focus on the table list.
    ///
    /// Call [`App::init`] to get the page's first load.
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, AppError> {
        let first = entries.first().ok_or(AppError::NoEntries)?;
        let generation = 1;
        let page = first.open(generation);
        let nav = FocusManager::new(entries.len()).with_wrap(false);

        Ok(Self {
            entries,
            nav,
            page,
            focus: Focus::Nav,
            generation,
            should_quit: false,
            key_mapper: Box::new(DefaultKeyMapper),
        })
    }

    pub fn with_key_mapper(mut self, mapper: impl KeyMapper + Send + Sync + 'static) -> Self {
        self.key_mapper = Box::new(mapper);
        self
    }

    pub fn init(&mut self) -> Vec<AppCommand> {
        let command = self.page.init();
        vec![self.lift(command)]
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Highlighted entry in the table list.
    pub fn nav_selected(&self) -> usize {
        self.nav.current()
    }

    pub fn page(&self) -> &RecordPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut RecordPage {
        &mut self.page
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_on_nav(&self) -> bool {
        self.focus == Focus::Nav
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Key context for the current state.
    pub fn key_context(&self) -> KeyContext {
        if self.page.is_in_form() {
            KeyContext::Form
        } else if self.focus_on_nav() {
            KeyContext::Navigation
        } else {
            KeyContext::Table
        }
    }

    /// Help line for the current state.
    pub fn help(&self) -> KeyHintsBar {
        match self.key_context() {
            KeyContext::Form => common::form_context(),
            KeyContext::Table => common::table(),
            KeyContext::Navigation => common::navigation(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<AppCommand> {
        let action = self.key_mapper.map_key(key, self.key_context());
        self.handle_action(action)
    }

    /// Bracketed paste goes to the focused text field of an open form.
    pub fn handle_paste(&mut self, text: String) {
        if let Some(form) = self.page.form_mut() {
            form.type_into(&InputAction::Paste(text));
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Vec<AppCommand> {
        if action == Action::Quit {
            info!("Quit requested");
            self.quit();
            return Vec::new();
        }

        if self.page.is_in_form() {
            return self.forward_to_page(&action);
        }

        match self.focus {
            Focus::Page => {
                if action == Action::Back {
                    debug!("Focus moved to table list");
                    self.focus = Focus::Nav;
                    return Vec::new();
                }
                self.forward_to_page(&action)
            }
            Focus::Nav => self.handle_nav_action(&action),
        }
    }

    /// Route a completion to the active page, dropping stale ones.
    pub fn on_event(&mut self, event: AppEvent) -> Vec<AppCommand> {
        if event.generation() != self.page.generation() {
            debug!(
                event_generation = event.generation(),
                page_generation = self.page.generation(),
                "Dropping stale completion"
            );
            return Vec::new();
        }

        match event {
            AppEvent::RowsLoaded { result, .. } => {
                self.page.rows_loaded(result);
                Vec::new()
            }
            AppEvent::SubmitCompleted { result, .. } => self
                .page
                .submit_completed(result)
                .map(|command| self.lift(command))
                .into_iter()
                .collect(),
        }
    }

    fn handle_nav_action(&mut self, action: &Action) -> Vec<AppCommand> {
        match action {
            Action::MoveUp => self.nav.prev(),
            Action::MoveDown => self.nav.next(),
            Action::Top => self.nav.first(),
            Action::Bottom => self.nav.last(),
            Action::Select => return self.open_selected(),
            _ => {}
        }
        Vec::new()
    }

    /// Replace the page with a fresh one for the highlighted entry.
    fn open_selected(&mut self) -> Vec<AppCommand> {
        let Some(entry) = self.entries.get(self.nav.current()) else {
            return Vec::new();
        };
        self.generation += 1;
        self.page = entry.open(self.generation);
        self.focus = Focus::Page;
        info!(table = entry.name(), generation = self.generation, "Opened table");

        let command = self.page.init();
        vec![self.lift(command)]
    }

    fn forward_to_page(&mut self, action: &Action) -> Vec<AppCommand> {
        self.page
            .handle_action(action)
            .map(|command| self.lift(command))
            .into_iter()
            .collect()
    }

    fn lift(&self, command: PageCommand) -> AppCommand {
        let generation = self.page.generation();
        match command {
            PageCommand::Load => AppCommand::Load {
                generation,
                source: self.page.source(),
            },
            PageCommand::Submit(submission) => AppCommand::Submit {
                generation,
                submission,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;
    use scenarioctl_components::form::FieldDefinition;
    use scenarioctl_components::table::TableColumn;

    use super::*;
    use crate::page::{CrudError, FormSlot, RecordMutator, RowSnapshot};

    const COLUMNS: [TableColumn; 2] = [TableColumn::new("ID", 6), TableColumn::new("Name", 20)];

    struct Named(&'static str);

    impl RecordSource for Named {
        fn title(&self) -> &str {
            self.0
        }

        fn columns(&self) -> &[TableColumn] {
            &COLUMNS
        }

        fn load(&self) -> Result<Vec<RowSnapshot>, CrudError> {
            Ok(vec![
                RowSnapshot::new(vec!["1".to_string(), format!("{} one", self.0)]).unwrap(),
            ])
        }
    }

    impl RecordMutator for Named {
        fn create(&self, form: &mut FormSlot) -> Result<(), CrudError> {
            form.enter_form_mode(
                vec![FieldDefinition::text("Name")],
                None,
                Arc::new(|_: &[String]| -> Result<(), CrudError> { Ok(()) }),
            );
            Ok(())
        }

        fn update(&self, _: usize, _: &RowSnapshot, _: &mut FormSlot) -> Result<(), CrudError> {
            Ok(())
        }

        fn delete(&self, _: usize, _: &RowSnapshot) -> Result<(), CrudError> {
            Ok(())
        }
    }

    fn entry(name: &'static str) -> NavEntry {
        NavEntry::new(name, move |generation| {
            let named = Arc::new(Named(name));
            RecordPage::new(named.clone(), Some(named), generation)
        })
    }

    fn app() -> App {
        App::new(vec![entry("Tasks"), entry("Plans"), entry("Maps")]).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn load_generation(commands: &[AppCommand]) -> u64 {
        match commands {
            [AppCommand::Load { generation, .. }] => *generation,
            other => panic!("expected a single load, got {other:?}"),
        }
    }

    #[test]
    fn test_starts_on_first_page_with_nav_focus() {
        let mut app = app();
        let commands = app.init();

        assert_eq!(load_generation(&commands), 1);
        assert_eq!(app.page().title(), "Tasks");
        assert!(app.focus_on_nav());
        assert_eq!(app.key_context(), KeyContext::Navigation);
        assert_eq!(
            app.help().text(),
            "[↑↓] Select table | [Enter] Open | [Ctrl+C] Quit"
        );
    }

    #[test]
    fn test_empty_entries_rejected() {
        assert!(matches!(App::new(Vec::new()), Err(AppError::NoEntries)));
    }

    #[test]
    fn test_enter_opens_highlighted_table() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.nav_selected(), 2);
        // List does not wrap
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.nav_selected(), 2);

        let commands = app.handle_key(key(KeyCode::Enter));
        assert_eq!(load_generation(&commands), 2);
        assert_eq!(app.page().title(), "Maps");
        assert_eq!(app.focus(), Focus::Page);
        assert_eq!(app.key_context(), KeyContext::Table);
    }

    #[test]
    fn test_esc_returns_focus_to_nav() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focus(), Focus::Page);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Nav);

        // Esc on the list is a no-op
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Nav);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_esc_in_form_cancels_form_only() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.page().is_in_form());
        assert_eq!(app.help().text(), "[Enter] Save | [Esc] Cancel");

        // Keys typed in the form are text, not table shortcuts
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.page().form().unwrap().collect_values(), vec!["j"]);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.page().is_in_form());
        assert_eq!(app.focus(), Focus::Page);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('n')));

        let commands = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(commands.is_empty());
        assert!(app.should_quit());
    }

    /// Treats `q` as quit everywhere.
    struct QuitOnQ;

    impl KeyMapper for QuitOnQ {
        fn map_key(&self, key: KeyEvent, context: KeyContext) -> Action {
            match key.code {
                KeyCode::Char('q') => Action::Quit,
                _ => DefaultKeyMapper.map_key(key, context),
            }
        }
    }

    #[test]
    fn test_custom_key_mapper() {
        let mut app = app().with_key_mapper(QuitOnQ);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.nav_selected(), 1);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_stale_completions_are_dropped() {
        let mut app = app();
        app.init();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page().generation(), 2);

        let rows = Named("Tasks").load().unwrap();
        app.on_event(AppEvent::RowsLoaded {
            generation: 1,
            result: Ok(rows.clone()),
        });
        assert!(app.page().rows().is_empty());

        app.on_event(AppEvent::RowsLoaded {
            generation: 2,
            result: Ok(rows),
        });
        assert_eq!(app.page().rows().len(), 1);
    }

    #[test]
    fn test_submit_round_trip_through_shell() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('n')));
        for c in "Town01".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        let commands = app.handle_key(key(KeyCode::Enter));
        let (generation, submission) = match commands.as_slice() {
            [AppCommand::Submit {
                generation,
                submission,
            }] => (*generation, submission.clone()),
            other => panic!("expected submit, got {other:?}"),
        };
        assert_eq!(submission.values(), ["Town01"]);

        let commands = app.on_event(AppEvent::SubmitCompleted {
            generation,
            result: submission.run(),
        });
        assert_eq!(load_generation(&commands), generation);
        assert!(!app.page().is_in_form());
    }

    #[test]
    fn test_paste_goes_to_form() {
        let mut app = app();
        app.handle_paste("ignored".to_string());
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('n')));

        app.handle_paste("/maps/town01.xodr".to_string());
        assert_eq!(
            app.page().form().unwrap().collect_values(),
            vec!["/maps/town01.xodr"]
        );
    }
}
