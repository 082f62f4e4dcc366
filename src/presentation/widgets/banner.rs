use ratatui::{prelude::*, widgets::*};

use crate::presentation::theme::Palette;

pub const BANNER_HEIGHT: u16 = 5;

/// Dismissible promotional panel shown above the search bar
pub struct BannerWidget {
    palette: Palette,
    close_key: Option<String>,
}

impl BannerWidget {
    pub fn new(palette: Palette, close_key: Option<String>) -> Self {
        Self { palette, close_key }
    }
}

impl Widget for BannerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_style(self.palette.accent())
            .style(self.palette.base())
            .title(Span::styled(" NXT WATCH ", self.palette.accent()));
        if let Some(key) = self.close_key {
            block = block.title(
                Line::from(Span::styled(format!(" {key}: close "), self.palette.muted()))
                    .right_aligned(),
            );
        }

        let lines = vec![
            Line::from("Buy Nxt Watch Premium prepaid plans with UPI"),
            Line::from(""),
            Line::from(Span::styled("[ GET IT NOW ]", self.palette.accent())),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::test_support::render_to_lines;

    #[test]
    fn test_banner_text() {
        let lines = render_to_lines(
            BannerWidget::new(Palette::LIGHT, Some("x".to_string())),
            60,
            BANNER_HEIGHT,
        );

        assert!(lines[0].contains("NXT WATCH"));
        assert!(lines[0].contains("x: close"));
        assert!(lines[1].contains("Buy Nxt Watch Premium prepaid plans with UPI"));
        assert!(lines[3].contains("GET IT NOW"));
    }

    #[test]
    fn test_banner_without_close_key() {
        let lines = render_to_lines(BannerWidget::new(Palette::DARK, None), 60, BANNER_HEIGHT);
        assert!(!lines[0].contains("close"));
    }
}
