//! Screen layout: table list on the left, the active page on the right.
//!
//! ```text
//! ┌ Tables ──────────┐┌ Tasks ────────────────────────────────┐
//! │▸ Tasks           ││ ID     Status       Plan   ...        │
//! │  Plans           ││                                       │
//! │  ...             ││ 3      Pending      nightly           │
//! └──────────────────┘│ Error: ...                            │
//!                     │ [↑↓] Navigate | [r] Reload | ...      │
//!                     └───────────────────────────────────────┘
//! ```
//!
//! The half that does not receive keys is drawn dimmed.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use scenarioctl_components::form::FormView;
use scenarioctl_components::nav::NavList;
use scenarioctl_components::table::RecordTable;
use scenarioctl_core::style::{self, border_style, error_style};

use crate::app::App;

/// Width of the table list.
pub const NAV_WIDTH: u16 = 24;

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    frame.render_widget(AppView::new(app), frame.area());
}

pub struct AppView<'a> {
    app: &'a App,
}

impl<'a> AppView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn render_page(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let page = self.app.page();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(focused))
            .title(format!(" {} ", page.title()));
        let inner = block.inner(area);
        block.render(area, buf);

        let error = page.last_error().filter(|_| !page.is_in_form());
        let [content_area, error_area, help_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(u16::from(error.is_some())),
            Constraint::Length(1),
        ])
        .areas(inner);

        match page.form() {
            Some(form) => FormView::new(form)
                .error(page.last_error())
                .render(content_area, buf),
            None => RecordTable::new(page.columns(), page.rows())
                .cursor(page.cursor())
                .focused(focused)
                .render(content_area, buf),
        }

        if let Some(error) = error {
            Paragraph::new(Line::styled(format!("Error: {error}"), error_style()))
                .render(error_area, buf);
        }

        self.app.help().render(help_area, buf);
    }
}

impl Widget for AppView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [nav_area, page_area] =
            Layout::horizontal([Constraint::Length(NAV_WIDTH), Constraint::Min(0)]).areas(area);

        // A form takes the keys even if the list had focus.
        let nav_focused = self.app.focus_on_nav() && !self.app.page().is_in_form();

        NavList::new(self.app.entries().iter().map(|entry| entry.name()))
            .selected(self.app.nav_selected())
            .focused(nav_focused)
            .render(nav_area, buf);
        self.render_page(page_area, buf, !nav_focused);

        let unfocused = if nav_focused { page_area } else { nav_area };
        buf.set_style(unfocused, style::dimmed(Style::default()));
    }
}
