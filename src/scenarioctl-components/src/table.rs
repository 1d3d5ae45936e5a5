//! Record table widget.
//!
//! Fixed-width columns, a header row and one highlighted row under the
//! cursor. The cursor is kept visible by ratatui's table state.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget};
use scenarioctl_core::style::{HEADER, TEXT, help_style, selection_style};

use crate::record::RowSnapshot;

/// Title and display width of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColumn {
    pub title: &'static str,
    pub width: u16,
}

impl TableColumn {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

/// Renders rows under a header with the cursor row highlighted.
pub struct RecordTable<'a> {
    columns: &'a [TableColumn],
    rows: &'a [RowSnapshot],
    cursor: usize,
    focused: bool,
}

impl<'a> RecordTable<'a> {
    pub fn new(columns: &'a [TableColumn], rows: &'a [RowSnapshot]) -> Self {
        Self {
            columns,
            rows,
            cursor: 0,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let header = Row::new(self.columns.iter().map(|c| Cell::from(c.title)))
            .style(Style::default().fg(HEADER).add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let widths = self.columns.iter().map(|c| Constraint::Length(c.width));
        let rows = self.rows.iter().map(|row| {
            Row::new(row.cells().iter().map(|cell| Cell::from(cell.as_str())))
                .style(Style::default().fg(TEXT))
        });

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(selection_style(self.focused));

        let mut state = TableState::default();
        if self.cursor < self.rows.len() {
            state.select(Some(self.cursor));
        }
        StatefulWidget::render(table, area, buf, &mut state);

        if self.rows.is_empty() && area.height > 2 {
            let empty = Rect::new(area.x, area.y + 2, area.width, 1);
            Paragraph::new(Line::styled("No records", help_style())).render(empty, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[TableColumn] = &[TableColumn::new("ID", 6), TableColumn::new("Name", 20)];

    fn rows() -> Vec<RowSnapshot> {
        ["Town01", "Town02", "Town03"]
            .iter()
            .enumerate()
            .map(|(i, name)| RowSnapshot::new(vec![(i + 1).to_string(), name.to_string()]).unwrap())
            .collect()
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_header_and_rows() {
        let rows = rows();
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        RecordTable::new(COLUMNS, &rows).render(area, &mut buf);

        assert!(line(&buf, 0).starts_with("ID     Name"));
        assert!(line(&buf, 2).starts_with("1      Town01"));
        assert!(line(&buf, 4).starts_with("3      Town03"));
    }

    #[test]
    fn test_cursor_row_highlighted() {
        let rows = rows();
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        RecordTable::new(COLUMNS, &rows)
            .cursor(1)
            .focused(true)
            .render(area, &mut buf);

        let highlight = selection_style(true);
        assert_eq!(buf[(0, 3)].bg, highlight.bg.unwrap());
        assert_ne!(buf[(0, 2)].bg, highlight.bg.unwrap());
    }

    #[test]
    fn test_empty_table_message() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        RecordTable::new(COLUMNS, &[]).render(area, &mut buf);

        assert!(line(&buf, 2).starts_with("No records"));
    }
}
