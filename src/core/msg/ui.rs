use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ToggleTheme,
}
