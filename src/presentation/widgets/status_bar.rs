use ratatui::{prelude::*, widgets::*};

use crate::presentation::theme::Palette;

/// Bottom line: the last status message, or key hints when there is none
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hints: &'a str,
    palette: Palette,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, hints: &'a str, palette: Palette) -> Self {
        Self {
            message,
            hints,
            palette,
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(message) => Span::styled(message, self.palette.base()),
            None => Span::styled(self.hints, self.palette.muted().italic()),
        };
        Paragraph::new(line)
            .style(self.palette.base())
            .render(area, buf);
    }
}
