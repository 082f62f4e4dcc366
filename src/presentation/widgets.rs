//! Reusable UI widgets
//!
//! Every widget here is stateless: it borrows what it draws and a `Palette`.

pub mod banner;
pub mod failure_view;
pub mod loader;
pub mod search_bar;
pub mod status_bar;
pub mod video_list;

pub use banner::BannerWidget;
pub use failure_view::FailureViewWidget;
pub use loader::LoaderWidget;
pub use search_bar::SearchBarWidget;
pub use status_bar::StatusBarWidget;
pub use video_list::VideoListWidget;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    /// Renders `widget` into a fresh buffer and returns its rows as text
    pub fn render_to_lines(widget: impl Widget, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_lines(&buf)
    }

    pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }
}
