//! Key mapping for scenarioctl.
//!
//! This module turns raw crossterm key events into [`Action`]s:
//! - [`Action`] - everything the shell, a record page or a form can be asked to do
//! - [`InputAction`] - text editing inside a form field
//! - [`KeyContext`] - which layer currently receives input
//! - [`KeyMapper`] - trait for mapping key events to actions
//! - [`DefaultKeyMapper`] - standard key bindings implementation
//!
//! The same key means different things depending on where input is routed:
//! `e` edits the selected row in a table but is an ordinary character in a
//! form, `Up` moves a cursor in a table but cycles a choice in a form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions for text input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// A character was typed
    Char(char),
    /// Backspace key - delete character before cursor
    Backspace,
    /// Delete key - delete character at cursor
    Delete,
    /// Left arrow - move cursor left
    Left,
    /// Right arrow - move cursor right
    Right,
    /// Home key - move cursor to start
    Home,
    /// End key - move cursor to end
    End,
    /// Clear the input (Ctrl+U)
    Clear,
    /// Pasted text
    Paste(String),
}

/// Actions dispatched to the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Confirm: open the highlighted table, or submit the open form
    Select,
    /// Go back: cancel the form, or return focus to the navigation list
    Back,

    // Cursor movement
    /// Move the highlight up one entry
    MoveUp,
    /// Move the highlight down one entry
    MoveDown,
    /// Move the highlight up one page
    PageUp,
    /// Move the highlight down one page
    PageDown,
    /// Jump to the first entry
    Top,
    /// Jump to the last entry
    Bottom,

    // Form
    /// Focus the next form field
    FocusNext,
    /// Focus the previous form field
    FocusPrev,
    /// Select the previous option of the focused choice field
    ChoicePrev,
    /// Select the next option of the focused choice field
    ChoiceNext,
    /// Text editing in the focused form field
    Input(InputAction),

    // Record table
    /// Open the create form (`n`)
    NewRecord,
    /// Open the edit form for the selected row (`e`)
    EditRecord,
    /// Delete the selected row (`d`)
    DeleteRecord,
    /// Reload the rows (`r`)
    Reload,

    /// No operation
    #[default]
    None,
}

/// Which layer of the interface currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The navigation list of tables
    Navigation,
    /// A record table in view mode
    Table,
    /// An open create/edit form
    Form,
}

/// Trait for mapping key events to actions.
pub trait KeyMapper {
    /// Map a key event to an action in the given context.
    ///
    /// Returns [`Action::None`] if the key should not trigger any action.
    fn map_key(&self, key: KeyEvent, context: KeyContext) -> Action;
}

/// Default key mapper with standard bindings.
///
/// # Key Bindings
///
/// | Key | Navigation | Table | Form |
/// |-----|------------|-------|------|
/// | `Ctrl+c` | Quit | Quit | Quit |
/// | `Enter` | Select | - | Select |
/// | `Esc` | Back | Back | Back |
/// | `Up`, `k` | MoveUp | MoveUp | ChoicePrev (`Up` only) |
/// | `Down`, `j` | MoveDown | MoveDown | ChoiceNext (`Down` only) |
/// | `PageUp` / `PageDown` | - | PageUp / PageDown | - |
/// | `Home` / `End` | Top / Bottom | Top / Bottom | cursor |
/// | `r` `n` `e` `d` | - | Reload / New / Edit / Delete | characters |
/// | `Tab` / `Shift+Tab` | - | - | FocusNext / FocusPrev |
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultKeyMapper;

impl DefaultKeyMapper {
    /// Create a new default key mapper.
    pub fn new() -> Self {
        Self
    }

    fn map_navigation(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::Select,
            KeyCode::Esc => Action::Back,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Home => Action::Top,
            KeyCode::End => Action::Bottom,
            _ => Action::None,
        }
    }

    fn map_table(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Back,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Home => Action::Top,
            KeyCode::End => Action::Bottom,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('n') => Action::NewRecord,
            KeyCode::Char('e') => Action::EditRecord,
            KeyCode::Char('d') => Action::DeleteRecord,
            _ => Action::None,
        }
    }

    fn map_form(key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => Action::Input(InputAction::Clear),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Enter => Action::Select,
            KeyCode::Esc => Action::Back,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Up => Action::ChoicePrev,
            KeyCode::Down => Action::ChoiceNext,
            KeyCode::Left => Action::Input(InputAction::Left),
            KeyCode::Right => Action::Input(InputAction::Right),
            KeyCode::Home => Action::Input(InputAction::Home),
            KeyCode::End => Action::Input(InputAction::End),
            KeyCode::Backspace => Action::Input(InputAction::Backspace),
            KeyCode::Delete => Action::Input(InputAction::Delete),
            KeyCode::Char(c) => Action::Input(InputAction::Char(c)),
            _ => Action::None,
        }
    }
}

impl KeyMapper for DefaultKeyMapper {
    fn map_key(&self, key: KeyEvent, context: KeyContext) -> Action {
        // Key releases and repeats reported by some terminals are not input
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match context {
            KeyContext::Navigation => Self::map_navigation(key),
            KeyContext::Table => Self::map_table(key),
            KeyContext::Form => Self::map_form(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mapper = DefaultKeyMapper::new();
        let ctrl_c = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);

        for context in [KeyContext::Navigation, KeyContext::Table, KeyContext::Form] {
            assert_eq!(mapper.map_key(ctrl_c, context), Action::Quit);
        }
    }

    #[test]
    fn test_navigation_bindings() {
        let mapper = DefaultKeyMapper::new();
        let ctx = KeyContext::Navigation;

        assert_eq!(mapper.map_key(key_event(KeyCode::Enter), ctx), Action::Select);
        assert_eq!(mapper.map_key(key_event(KeyCode::Up), ctx), Action::MoveUp);
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('j')), ctx), Action::MoveDown);
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('n')), ctx), Action::None);
    }

    #[test]
    fn test_table_bindings() {
        let mapper = DefaultKeyMapper::new();
        let ctx = KeyContext::Table;

        assert_eq!(mapper.map_key(key_event(KeyCode::Char('r')), ctx), Action::Reload);
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('n')), ctx), Action::NewRecord);
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('e')), ctx), Action::EditRecord);
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('d')), ctx), Action::DeleteRecord);
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('k')), ctx), Action::MoveUp);
        assert_eq!(mapper.map_key(key_event(KeyCode::PageDown), ctx), Action::PageDown);
        assert_eq!(mapper.map_key(key_event(KeyCode::End), ctx), Action::Bottom);
        assert_eq!(mapper.map_key(key_event(KeyCode::Esc), ctx), Action::Back);
        // Enter does nothing on a table
        assert_eq!(mapper.map_key(key_event(KeyCode::Enter), ctx), Action::None);
    }

    #[test]
    fn test_form_bindings() {
        let mapper = DefaultKeyMapper::new();
        let ctx = KeyContext::Form;

        assert_eq!(mapper.map_key(key_event(KeyCode::Tab), ctx), Action::FocusNext);
        assert_eq!(
            mapper.map_key(
                key_event_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT),
                ctx
            ),
            Action::FocusPrev
        );
        assert_eq!(mapper.map_key(key_event(KeyCode::Up), ctx), Action::ChoicePrev);
        assert_eq!(mapper.map_key(key_event(KeyCode::Down), ctx), Action::ChoiceNext);
        assert_eq!(mapper.map_key(key_event(KeyCode::Enter), ctx), Action::Select);
        assert_eq!(mapper.map_key(key_event(KeyCode::Esc), ctx), Action::Back);
    }

    #[test]
    fn test_form_letters_are_text() {
        let mapper = DefaultKeyMapper::new();
        let ctx = KeyContext::Form;

        // Table shortcuts and vim keys are plain characters inside a form
        for c in ['e', 'd', 'n', 'r', 'j', 'k'] {
            assert_eq!(
                mapper.map_key(key_event(KeyCode::Char(c)), ctx),
                Action::Input(InputAction::Char(c))
            );
        }
        assert_eq!(
            mapper.map_key(key_event(KeyCode::Backspace), ctx),
            Action::Input(InputAction::Backspace)
        );
        assert_eq!(
            mapper.map_key(
                key_event_with_modifiers(KeyCode::Char('u'), KeyModifiers::CONTROL),
                ctx
            ),
            Action::Input(InputAction::Clear)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mapper = DefaultKeyMapper::new();
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(mapper.map_key(release, KeyContext::Navigation), Action::None);
    }

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}
