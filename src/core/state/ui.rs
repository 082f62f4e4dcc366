use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub dark_theme: bool,
}

impl UiState {
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ToggleTheme => {
                self.dark_theme = !self.dark_theme;
                vec![]
            }
        }
    }
}
