//! Dynamic form engine.
//!
//! A form is built from a list of [`FieldDefinition`]s. Each field is either
//! free text or a single choice out of `(label, value)` pairs. The form owns
//! the focus, the text buffers and the selected option of every choice
//! field, and hands back one string per field on submit: the typed text, or
//! the selected option's value.
//!
//! ```text
//! FieldDefinition ──► FormField (InputState + selected option)
//!                          │
//!   Tab / Shift+Tab ───────┤ focus_next / focus_prev
//!   ↑ / ↓ ─────────────────┤ cycle_choice
//!   characters ────────────┤ type_into (text fields only)
//!                          ▼
//!                   collect_values ──► Submission { values, handler }
//! ```

use std::fmt;
use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use scenarioctl_core::InputAction;
use scenarioctl_core::style::{
    ACCENT, SURFACE_0, TEXT, TEXT_DIM, TEXT_MUTED, border_style, error_style,
};
use thiserror::Error;

use crate::focus::FocusManager;
use crate::input::InputState;
use crate::key_hints;
use crate::record::{CrudError, RecordId, RowSnapshot, SubmitHandler};

/// Errors building field definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("a choice needs at least one option")]
    EmptyChoice,

    #[error("No options available for {label}")]
    NoOptions { label: String },
}

/// One option of a choice field: what is shown and what is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A non-empty, ordered list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOptions(Vec<SelectOption>);

impl ChoiceOptions {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, FieldError> {
        if options.is_empty() {
            return Err(FieldError::EmptyChoice);
        }
        Ok(Self(options))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.0.iter()
    }

    /// Index of the first option whose label or value equals `text`.
    pub fn position_matching(&self, text: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|opt| opt.label == text || opt.value == text)
    }

    // Non-empty by construction, so index 0 always exists
    fn label_at(&self, index: usize) -> &str {
        self.0
            .get(index)
            .or_else(|| self.0.first())
            .map(|opt| opt.label.as_str())
            .unwrap_or_default()
    }
}

/// What a field accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Exactly one of a fixed set of options
    Choice(ChoiceOptions),
}

/// Which row column pre-populates a field when editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnBinding {
    /// Field `i` reads column `i + 1` (column 0 is the identifier).
    #[default]
    Positional,
    /// Read this column.
    Column(usize),
    /// Never pre-populated.
    Unbound,
}

/// Declarative description of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub label: String,
    pub kind: FieldKind,
    pub binding: ColumnBinding,
}

impl FieldDefinition {
    /// A free text field.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Text,
            binding: ColumnBinding::Positional,
        }
    }

    /// A choice field. Fails when `options` is empty.
    pub fn choice(label: impl Into<String>, options: Vec<SelectOption>) -> Result<Self, FieldError> {
        let label = label.into();
        let options = ChoiceOptions::new(options).map_err(|_| FieldError::NoOptions {
            label: label.clone(),
        })?;
        Ok(Self {
            label,
            kind: FieldKind::Choice(options),
            binding: ColumnBinding::Positional,
        })
    }

    /// Pre-populate from row column `column` instead of the positional one.
    pub fn bound_to(mut self, column: usize) -> Self {
        self.binding = ColumnBinding::Column(column);
        self
    }

    /// Never pre-populate this field.
    pub fn unbound(mut self) -> Self {
        self.binding = ColumnBinding::Unbound;
        self
    }
}

/// Direction for [`FormState::cycle_choice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Prev,
    Next,
}

/// Runtime state of one field.
///
/// For choice fields the text buffer mirrors the selected option's label.
#[derive(Debug, Clone)]
pub struct FormField {
    definition: FieldDefinition,
    input: InputState,
    selected: usize,
}

impl FormField {
    fn new(definition: FieldDefinition) -> Self {
        let input = match &definition.kind {
            FieldKind::Text => InputState::new(),
            FieldKind::Choice(options) => InputState::new().with_value(options.label_at(0)),
        };
        Self {
            definition,
            input,
            selected: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.definition.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.definition.kind
    }

    pub fn binding(&self) -> ColumnBinding {
        self.definition.binding
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.definition.kind, FieldKind::Choice(_))
    }

    /// Displayed text: the buffer for text fields, the selected label for choices.
    pub fn text(&self) -> &str {
        &self.input.value
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Selected option index, `None` for text fields.
    pub fn selected(&self) -> Option<usize> {
        match self.definition.kind {
            FieldKind::Text => None,
            FieldKind::Choice(_) => Some(self.selected),
        }
    }

    /// Submitted value: the text, or the selected option's value.
    pub fn value(&self) -> String {
        match &self.definition.kind {
            FieldKind::Text => self.input.value.clone(),
            FieldKind::Choice(options) => options
                .get(self.selected)
                .map(|opt| opt.value.clone())
                .unwrap_or_default(),
        }
    }

    fn select(&mut self, index: usize) {
        if let FieldKind::Choice(options) = &self.definition.kind
            && let Some(opt) = options.get(index)
        {
            self.selected = index;
            self.input.set_value(opt.label.clone());
        }
    }

    fn cycle(&mut self, direction: Cycle) -> bool {
        let FieldKind::Choice(options) = &self.definition.kind else {
            return false;
        };
        let len = options.len();
        let next = match direction {
            Cycle::Next => (self.selected + 1) % len,
            Cycle::Prev => (self.selected + len - 1) % len,
        };
        self.select(next);
        true
    }

    /// Select the first option matching `text` by label or value, else option 0.
    fn select_matching(&mut self, text: &str) -> bool {
        let FieldKind::Choice(options) = &self.definition.kind else {
            return false;
        };
        let index = options.position_matching(text).unwrap_or(0);
        self.select(index);
        true
    }

    fn set_text(&mut self, text: &str) {
        if self.is_choice() {
            self.select_matching(text);
        } else {
            self.input.set_value(text);
        }
    }
}

/// A snapshot of submitted values and the handler that will persist them.
///
/// Runs off the UI thread; the form itself is not touched while it runs.
#[derive(Clone)]
pub struct Submission {
    values: Vec<String>,
    handler: Arc<dyn SubmitHandler>,
}

impl Submission {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Invoke the handler with the captured values.
    pub fn run(&self) -> Result<(), CrudError> {
        self.handler.submit(&self.values)
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

/// An open create or edit form.
///
/// `subject` is the record being edited; `None` means the form creates a
/// new record.
pub struct FormState {
    fields: Vec<FormField>,
    focus: FocusManager,
    subject: Option<RecordId>,
    on_submit: Arc<dyn SubmitHandler>,
    pending: bool,
}

impl FormState {
    /// Build a form with one field per definition, focus on the first field.
    pub fn new(
        definitions: Vec<FieldDefinition>,
        subject: Option<RecordId>,
        on_submit: Arc<dyn SubmitHandler>,
    ) -> Self {
        let fields: Vec<FormField> = definitions.into_iter().map(FormField::new).collect();
        let focus = FocusManager::new(fields.len());
        Self {
            fields,
            focus,
            subject,
            on_submit,
            pending: false,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the focused field.
    pub fn focused(&self) -> usize {
        self.focus.current()
    }

    pub fn subject(&self) -> Option<&RecordId> {
        self.subject.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        self.subject.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Record"
        } else {
            "Create Record"
        }
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
    }

    /// Move the focused choice field's selection. No-op on text fields.
    pub fn cycle_choice(&mut self, direction: Cycle) -> bool {
        let index = self.focus.current();
        self.fields
            .get_mut(index)
            .is_some_and(|field| field.cycle(direction))
    }

    /// Route an editing action to the focused field if it is a text field.
    ///
    /// Returns whether the action was consumed.
    pub fn type_into(&mut self, action: &InputAction) -> bool {
        let index = self.focus.current();
        match self.fields.get_mut(index) {
            Some(field) if !field.is_choice() => field.input.apply(action),
            _ => false,
        }
    }

    /// One value per field, in field order.
    pub fn collect_values(&self) -> Vec<String> {
        self.fields.iter().map(FormField::value).collect()
    }

    /// Capture the current values together with the submit handler.
    pub fn submission(&self) -> Submission {
        Submission {
            values: self.collect_values(),
            handler: Arc::clone(&self.on_submit),
        }
    }

    /// Whether a submission from this form is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Set field `index` from a string. Choice fields select by label or value.
    pub fn set_text(&mut self, index: usize, text: &str) -> bool {
        match self.fields.get_mut(index) {
            Some(field) => {
                field.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Select the option of choice field `index` matching `text` by label or
    /// value, falling back to option 0. Returns false for text fields.
    pub fn select_matching(&mut self, index: usize, text: &str) -> bool {
        self.fields
            .get_mut(index)
            .is_some_and(|field| field.select_matching(text))
    }

    /// Pre-populate fields from a row according to each field's binding.
    ///
    /// Cells past the end of the row leave their field untouched.
    pub fn prefill_from_row(&mut self, row: &RowSnapshot) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            let column = match field.binding() {
                ColumnBinding::Positional => index + 1,
                ColumnBinding::Column(column) => column,
                ColumnBinding::Unbound => continue,
            };
            if let Some(cell) = row.cell(column) {
                field.set_text(cell);
            }
        }
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("fields", &self.fields)
            .field("focused", &self.focus.current())
            .field("subject", &self.subject)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

/// Renders a [`FormState`] inside a rounded border.
///
/// ```text
/// ╭──────────────────────────────────────────────╮
/// │ Edit Record                                  │
/// │                                              │
/// │ Name:                                        │
/// │ nightly-town01                               │
/// │ Map:                                         │
/// │ → [↑↓] ◉ Town01 | ○ Town02                   │
/// │                                              │
/// │ [Tab] Next | [Shift+Tab] Prev | ...          │
/// │                                              │
/// │ Error: UNIQUE constraint failed: plan.name   │
/// ╰──────────────────────────────────────────────╯
/// ```
pub struct FormView<'a> {
    form: &'a FormState,
    error: Option<&'a str>,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form, error: None }
    }

    /// Show an error line under the help line.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn field_lines(&self, index: usize, field: &'a FormField) -> [Line<'a>; 2] {
        let focused = self.form.focus.is_focused(index);

        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_DIM)
        };
        let label = Line::from(Span::styled(format!("{}:", field.label()), label_style));

        let value = match field.kind() {
            FieldKind::Text => Self::text_line(field, focused),
            FieldKind::Choice(options) => Self::choice_line(options, field.selected, focused),
        };

        [label, value]
    }

    fn text_line(field: &'a FormField, focused: bool) -> Line<'a> {
        let text_style = Style::default().fg(TEXT);
        if !focused {
            if field.input.is_empty() {
                return Line::from(Span::styled(
                    field.label().to_string(),
                    Style::default().fg(TEXT_MUTED),
                ));
            }
            return Line::from(Span::styled(field.text(), text_style));
        }

        let cursor_style = Style::default().fg(SURFACE_0).bg(ACCENT);
        let (before, at, after) = field.input.split_at_cursor();
        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled(at.unwrap_or(" "), cursor_style),
            Span::styled(after, text_style),
        ])
    }

    fn choice_line(options: &'a ChoiceOptions, selected: usize, focused: bool) -> Line<'a> {
        let marker = if focused { "→ " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled("[↑↓] ", Style::default().fg(TEXT_MUTED)),
        ];

        for (i, opt) in options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(TEXT_MUTED)));
            }
            let (bullet, style) = if i == selected {
                ("◉ ", Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
            } else {
                ("○ ", Style::default().fg(TEXT_DIM))
            };
            spans.push(Span::styled(format!("{bullet}{}", opt.label), style));
        }

        Line::from(spans)
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style(true))
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(Span::styled(
                self.form.title(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (index, field) in self.form.fields.iter().enumerate() {
            lines.extend(self.field_lines(index, field));
        }

        lines.push(Line::default());
        lines.push(key_hints::common::form().to_line());

        if let Some(error) = self.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(format!("Error: {error}"), error_style())));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
