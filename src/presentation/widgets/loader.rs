use ratatui::{prelude::*, widgets::*};

use crate::presentation::theme::Palette;

/// Three-dot spinner; one dot is lit per tick
pub struct LoaderWidget {
    ticks: u64,
    palette: Palette,
}

impl LoaderWidget {
    pub fn new(ticks: u64, palette: Palette) -> Self {
        Self { ticks, palette }
    }

    pub fn dots(&self) -> String {
        let lit = (self.ticks % 3) as usize;
        (0..3)
            .map(|i| if i == lit { '●' } else { '○' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Widget for LoaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled(self.dots(), self.palette.accent()))
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}
