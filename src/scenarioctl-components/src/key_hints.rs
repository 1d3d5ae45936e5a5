//! Key hints bar.
//!
//! Renders keyboard shortcut hints as `[Tab] Next | [Esc] Cancel`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use scenarioctl_core::style::{ACCENT, TEXT_DIM, TEXT_MUTED};

/// A single key hint (key + description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

impl<'a, 'b> From<(&'a str, &'b str)> for KeyHint {
    fn from((key, desc): (&'a str, &'b str)) -> Self {
        Self::new(key, desc)
    }
}

/// A horizontal bar of key hints.
#[derive(Debug, Clone)]
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
    separator: String,
    dimmed: bool,
}

impl KeyHintsBar {
    pub fn new() -> Self {
        Self {
            hints: Vec::new(),
            separator: " | ".to_string(),
            dimmed: false,
        }
    }

    /// Create from a slice of (key, description) tuples.
    pub fn from_tuples(hints: &[(&str, &str)]) -> Self {
        Self::new().hints(hints.iter().map(|&h| h.into()))
    }

    /// Add a hint.
    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    /// Add multiple hints.
    pub fn hints(mut self, hints: impl IntoIterator<Item = KeyHint>) -> Self {
        self.hints.extend(hints);
        self
    }

    /// Render every hint in the muted help colour.
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// The bar as plain text.
    pub fn text(&self) -> String {
        self.hints
            .iter()
            .map(|h| format!("[{}] {}", h.key, h.description))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// The bar as a styled line, for embedding in a paragraph.
    pub fn to_line(&self) -> Line<'static> {
        let (key_style, desc_style) = if self.dimmed {
            (Style::default().fg(TEXT_MUTED), Style::default().fg(TEXT_MUTED))
        } else {
            (Style::default().fg(ACCENT), Style::default().fg(TEXT_DIM))
        };

        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator.clone(), desc_style));
            }
            spans.push(Span::styled(format!("[{}]", hint.key), key_style));
            spans.push(Span::styled(format!(" {}", hint.description), desc_style));
        }
        Line::from(spans)
    }
}

impl Default for KeyHintsBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        Paragraph::new(self.to_line()).render(area, buf);
    }
}

/// Help lines for each input layer.
pub mod common {
    use super::KeyHintsBar;

    /// Shown under an open create/edit form.
    pub fn form() -> KeyHintsBar {
        KeyHintsBar::from_tuples(&[
            ("Tab", "Next"),
            ("Shift+Tab", "Prev"),
            ("↑↓", "Choose"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ])
    }

    /// Shown under the page while a form is open.
    pub fn form_context() -> KeyHintsBar {
        KeyHintsBar::from_tuples(&[("Enter", "Save"), ("Esc", "Cancel")])
    }

    /// Shown under a record table that holds focus.
    pub fn table() -> KeyHintsBar {
        KeyHintsBar::from_tuples(&[
            ("↑↓", "Navigate"),
            ("r", "Reload"),
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("Esc", "Back to Tables"),
        ])
    }

    /// Shown while the navigation list holds focus.
    pub fn navigation() -> KeyHintsBar {
        KeyHintsBar::from_tuples(&[
            ("↑↓", "Select table"),
            ("Enter", "Open"),
            ("Ctrl+C", "Quit"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_hint_from_tuple() {
        let hint: KeyHint = ("Esc", "Cancel").into();
        assert_eq!(hint, KeyHint::new("Esc", "Cancel"));
    }

    #[test]
    fn test_text_format() {
        let bar = KeyHintsBar::new().hint("Enter", "Save").hint("Esc", "Cancel");
        assert_eq!(bar.text(), "[Enter] Save | [Esc] Cancel");
    }

    #[test]
    fn test_common_help_lines() {
        assert_eq!(
            common::form().text(),
            "[Tab] Next | [Shift+Tab] Prev | [↑↓] Choose | [Enter] Save | [Esc] Cancel"
        );
        assert_eq!(
            common::table().text(),
            "[↑↓] Navigate | [r] Reload | [n] New | [e] Edit | [d] Delete | [Esc] Back to Tables"
        );
        assert_eq!(
            common::navigation().text(),
            "[↑↓] Select table | [Enter] Open | [Ctrl+C] Quit"
        );
        assert_eq!(common::form_context().text(), "[Enter] Save | [Esc] Cancel");
    }

    #[test]
    fn test_line_matches_text() {
        let bar = common::table();
        let line = bar.to_line();
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, bar.text());
    }

    #[test]
    fn test_render_into_buffer() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        common::form_context().render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.starts_with("[Enter] Save | [Esc] Cancel"));
    }
}
