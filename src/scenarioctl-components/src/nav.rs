//! Navigation list of tables.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use scenarioctl_core::style::{TEXT_DIM, border_style, selection_style};

/// Bordered list of entries with one highlighted.
pub struct NavList<'a> {
    title: &'a str,
    items: Vec<&'a str>,
    selected: usize,
    focused: bool,
}

impl<'a> NavList<'a> {
    pub fn new(items: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            title: "Tables",
            items: items.into_iter().collect(),
            selected: 0,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for NavList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(border_style(self.focused));

        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("▸ {item}"),
                        selection_style(self.focused),
                    ))
                } else {
                    Line::from(Span::styled(format!("  {item}"), Style::default().fg(TEXT_DIM)))
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_title_and_marker() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        NavList::new(["Tasks", "Plans", "AVs"])
            .selected(1)
            .focused(true)
            .render(area, &mut buf);

        assert!(line(&buf, 0).contains("Tables"));
        assert!(line(&buf, 1).contains("  Tasks"));
        assert!(line(&buf, 2).contains("▸ Plans"));
        assert_eq!(buf[(1, 2)].bg, selection_style(true).bg.unwrap());
    }
}
