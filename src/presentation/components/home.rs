//! Home view
//!
//! Banner, search bar, a body chosen by the fetch status and the status bar.

use chrono::{Local, NaiveDate};
use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::fetch::FetchStatus,
    presentation::{
        config::Action,
        theme::Palette,
        widgets::{
            banner::BANNER_HEIGHT, search_bar::SEARCH_BAR_HEIGHT, BannerWidget,
            FailureViewWidget, LoaderWidget, SearchBarWidget, StatusBarWidget, VideoListWidget,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct HomeView {
    /// Date that video ages are computed against; today when unset
    today: Option<NaiveDate>,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the date used for "N years ago" labels
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let home = &state.home;
        let keybindings = &state.config.config.keybindings;

        frame.render_widget(Block::default().style(palette.base()), area);

        let banner_height = if home.banner_visible { BANNER_HEIGHT } else { 0 };
        let [banner_area, search_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if home.banner_visible {
            frame.render_widget(
                BannerWidget::new(*palette, keybindings.key_for(Action::CloseBanner)),
                banner_area,
            );
        }

        frame.render_widget(
            SearchBarWidget::new(&home.search_text, home.search_focused, *palette),
            search_area,
        );

        match home.status {
            FetchStatus::Idle => {}
            FetchStatus::Loading => {
                frame.render_widget(LoaderWidget::new(state.system.ticks, *palette), body_area);
            }
            FetchStatus::Success => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                frame.render_widget(
                    VideoListWidget::new(&home.videos, today, *palette)
                        .selected(home.selected_index)
                        .retry_key(keybindings.key_for(Action::Retry)),
                    body_area,
                );
            }
            FetchStatus::Failure => {
                frame.render_widget(
                    FailureViewWidget::new(keybindings.key_for(Action::Retry), *palette),
                    body_area,
                );
            }
        }

        let hints = self.hints(state);
        frame.render_widget(
            StatusBarWidget::new(state.system.status_message.as_deref(), &hints, *palette),
            status_area,
        );
    }

    fn hints(&self, state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        if state.home.search_focused {
            return "enter: search  esc: done".to_string();
        }

        [
            (Action::FocusSearch, "search"),
            (Action::ToggleTheme, "theme"),
            (Action::Quit, "quit"),
        ]
        .into_iter()
        .filter_map(|(action, label)| keybindings.key_for(action).map(|key| format!("{key}: {label}")))
        .collect::<Vec<_>>()
        .join("  ")
    }
}
