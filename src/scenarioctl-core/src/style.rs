//! Scenarioctl theme.
//!
//! A dark slate background with a teal accent. All colours are constants so
//! widgets can use them without carrying a theme object around.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// ACCENT COLORS
// ============================================================

/// Primary accent - focused elements, cursor, selected row
pub const ACCENT: Color = Color::Rgb(0, 200, 170); // #00C8AA

/// Dark accent - selected row background when the table is unfocused
pub const ACCENT_DIM: Color = Color::Rgb(0, 110, 95); // #006E5F

// ============================================================
// SURFACES
// ============================================================

/// Darkest surface - unfocused input background
pub const SURFACE_0: Color = Color::Rgb(18, 24, 33); // #121821

/// Raised surface - focused input background, hint bar
pub const SURFACE_1: Color = Color::Rgb(30, 40, 54); // #1E2836

// ============================================================
// TEXT
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(235, 240, 245); // #EBF0F5

/// Secondary text - labels, inactive navigation entries
pub const TEXT_DIM: Color = Color::Rgb(135, 150, 170); // #8796AA

/// Muted text - placeholders, help lines, the unfocused half of the screen
pub const TEXT_MUTED: Color = Color::Rgb(80, 95, 115); // #505F73

// ============================================================
// SEMANTIC
// ============================================================

/// Error line under tables and forms
pub const ERROR: Color = Color::Rgb(240, 100, 100); // #F06464

/// Table header text
pub const HEADER: Color = Color::Rgb(250, 205, 100); // #FACD64

// ============================================================
// BORDERS
// ============================================================

/// Border of an unfocused panel
pub const BORDER: Color = Color::Rgb(45, 60, 80); // #2D3C50

/// Border of the panel holding input focus
pub const BORDER_FOCUS: Color = ACCENT;

// ============================================================
// STYLE HELPERS
// ============================================================

/// Style for a panel border depending on focus.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Style for a selected row or list entry.
pub fn selection_style(focused: bool) -> Style {
    let bg = if focused { ACCENT } else { ACCENT_DIM };
    Style::default()
        .fg(SURFACE_0)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Style for the error line shown under a table or form.
pub fn error_style() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

/// Style for help and hint lines.
pub fn help_style() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dims a style; used for whichever half of the screen does not hold focus.
pub fn dimmed(style: Style) -> Style {
    style.add_modifier(Modifier::DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_follows_focus() {
        assert_eq!(border_style(true).fg, Some(BORDER_FOCUS));
        assert_eq!(border_style(false).fg, Some(BORDER));
    }

    #[test]
    fn test_dimmed_adds_modifier() {
        let style = dimmed(Style::default().fg(TEXT));
        assert!(style.add_modifier.contains(Modifier::DIM));
        assert_eq!(style.fg, Some(TEXT));
    }
}
