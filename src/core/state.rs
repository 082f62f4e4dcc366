pub mod home;
pub mod system;
pub mod ui;

pub use home::HomeState;
pub use system::SystemState;
pub use ui::UiState;

use crate::infrastructure::config::Config;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub home: HomeState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            ui: UiState {
                dark_theme: config.dark_theme,
            },
            config: ConfigState { config },
            ..Default::default()
        }
    }
}
