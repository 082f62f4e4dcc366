use serde::{Deserialize, Serialize};

pub mod home;
pub mod system;
pub mod ui;

use home::HomeMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Home screen operations (delegated to HomeState)
    Home(HomeMsg),

    // Theme and other presentation toggles (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Home(_) | Msg::Ui(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::System(SystemMsg::Tick).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Home(HomeMsg::FetchVideos).is_frequent());
        assert!(!Msg::Ui(UiMsg::ToggleTheme).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Home(HomeMsg::Retry), Msg::Home(HomeMsg::Retry));
        assert_ne!(Msg::Home(HomeMsg::ScrollUp), Msg::Home(HomeMsg::ScrollDown));
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Home(HomeMsg::UpdateSearchText("cats".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
