use ratatui::{prelude::*, widgets::*};

use crate::presentation::theme::Palette;

pub const SEARCH_BAR_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Search";

pub struct SearchBarWidget<'a> {
    text: &'a str,
    focused: bool,
    palette: Palette,
}

impl<'a> SearchBarWidget<'a> {
    pub fn new(text: &'a str, focused: bool, palette: Palette) -> Self {
        Self {
            text,
            focused,
            palette,
        }
    }

    fn content(&self) -> Line<'a> {
        let mut spans = if self.text.is_empty() && !self.focused {
            vec![Span::styled(PLACEHOLDER, self.palette.muted())]
        } else {
            vec![Span::raw(self.text)]
        };
        if self.focused {
            spans.push(Span::styled(" ", self.palette.highlight()));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for SearchBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.palette.accent()
        } else {
            self.palette.muted()
        };
        let block = Block::bordered()
            .border_style(border_style)
            .style(self.palette.base());

        // Keep the end of long queries visible
        let inner_width = area.width.saturating_sub(3) as usize;
        let scroll = self.text.chars().count().saturating_sub(inner_width);

        Paragraph::new(self.content())
            .block(block)
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
            .render(area, buf);
    }
}
