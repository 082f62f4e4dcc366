use ratatui::{prelude::*, widgets::*};

use crate::presentation::theme::Palette;

/// Shown when the last fetch failed; offers a retry
pub struct FailureViewWidget {
    retry_key: Option<String>,
    palette: Palette,
}

impl FailureViewWidget {
    pub fn new(retry_key: Option<String>, palette: Palette) -> Self {
        Self { retry_key, palette }
    }
}

impl Widget for FailureViewWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Oops! Something Went Wrong",
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "We are having some trouble to complete your request.",
                self.palette.muted(),
            )),
            Line::from(Span::styled("Please try again.", self.palette.muted())),
        ];
        if let Some(key) = self.retry_key {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("[ Retry ] press {key}"),
                self.palette.accent(),
            )));
        }

        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}
