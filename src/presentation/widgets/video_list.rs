use chrono::NaiveDate;
use ratatui::{prelude::*, widgets::*};

use crate::{domain::text::ellipsize, domain::video::Video, presentation::theme::Palette};

/// One row per video, or the no-results panel when the list is empty
pub struct VideoListWidget<'a> {
    videos: &'a [Video],
    selected: Option<usize>,
    today: NaiveDate,
    retry_key: Option<String>,
    palette: Palette,
}

impl<'a> VideoListWidget<'a> {
    pub fn new(videos: &'a [Video], today: NaiveDate, palette: Palette) -> Self {
        Self {
            videos,
            selected: None,
            today,
            retry_key: None,
            palette,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn retry_key(mut self, retry_key: Option<String>) -> Self {
        self.retry_key = retry_key;
        self
    }

    fn item(&self, video: &Video, width: usize) -> ListItem<'static> {
        let meta = format!(
            "{} • {}",
            video.views_label(),
            video.published_label(self.today)
        );
        ListItem::new(vec![
            Line::from(Span::styled(
                ellipsize(&video.title, width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(ellipsize(&video.channel_name, width)),
            Line::from(ellipsize(&meta, width)),
            Line::from(""),
        ])
    }

    fn render_empty(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "No Search results found",
                self.palette.base().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Try different key words or remove search filter",
                self.palette.muted(),
            )),
        ];
        if let Some(key) = &self.retry_key {
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

impl<'a> Widget for VideoListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.videos.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        // Leave room for the highlight symbol
        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .videos
            .iter()
            .map(|video| self.item(video, width))
            .collect();

        let list = List::new(items)
            .style(self.palette.base())
            .highlight_style(self.palette.highlight())
            .highlight_symbol("▌ ")
            .highlight_spacing(HighlightSpacing::Always);

        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::test_support::render_to_lines;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 19).expect("valid date")
    }

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail_url: format!("https://example.com/{id}.png"),
            view_count: "1.4K".to_string(),
            published_at: "Apr 19, 2019".to_string(),
            channel_name: "iB Cricket".to_string(),
            profile_image_url: format!("https://example.com/{id}-channel.png"),
        }
    }

    #[test]
    fn test_renders_one_row_per_video() {
        let videos = vec![video("a", "Sehwag shares his batting experience"), video("b", "Ed Sheeran")];
        let text = render_to_lines(VideoListWidget::new(&videos, today(), Palette::LIGHT), 60, 10)
            .join("\n");

        assert!(text.contains("Sehwag shares his batting experience"));
        assert!(text.contains("Ed Sheeran"));
        assert!(text.contains("iB Cricket"));
        assert!(text.contains("1.4K views • 5 years ago"));
    }

    #[test]
    fn test_selected_row_has_marker() {
        let videos = vec![video("a", "First"), video("b", "Second")];
        let lines = render_to_lines(
            VideoListWidget::new(&videos, today(), Palette::LIGHT).selected(Some(1)),
            40,
            10,
        );

        assert!(lines[0].starts_with("  First"));
        assert!(lines[4].starts_with("▌ Second"));
    }

    #[test]
    fn test_long_titles_are_ellipsized() {
        let videos = vec![video("a", "A very long title that does not fit")];
        let lines = render_to_lines(VideoListWidget::new(&videos, today(), Palette::LIGHT), 16, 4);
        assert!(lines[0].trim_end().ends_with('…'));
    }

    #[test]
    fn test_empty_list_shows_no_results_panel() {
        let text = render_to_lines(
            VideoListWidget::new(&[], today(), Palette::DARK).retry_key(Some("r".to_string())),
            60,
            10,
        )
        .join("\n");

        assert!(text.contains("No Search results found"));
        assert!(text.contains("Try different key words or remove search filter"));
        assert!(text.contains("[ Retry ] press r"));
    }
}
