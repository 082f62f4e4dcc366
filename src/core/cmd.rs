use serde::{Deserialize, Serialize};

use crate::domain::fetch::RequestId;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Drawing is done by AppRunner once per loop iteration
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, terminal control, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Request the video list for `search`; the result comes back tagged with `request_id`
    FetchVideos {
        request_id: RequestId,
        search: String,
    },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
}

impl Cmd {
    /// Human-readable name used in execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::FetchVideos { .. } => "FetchVideos".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_name() {
        let fetch = Cmd::FetchVideos {
            request_id: RequestId::new(1),
            search: String::new(),
        };
        assert_eq!(fetch.name(), "FetchVideos");
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })
            .name(),
            "Tui(Resize)"
        );
        assert_eq!(
            Cmd::LogError {
                message: "x".to_string()
            }
            .name(),
            "LogError"
        );
    }

    #[test]
    fn test_cmd_serialization() -> color_eyre::Result<()> {
        let cmd = Cmd::FetchVideos {
            request_id: RequestId::new(2),
            search: "cats".to_string(),
        };
        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);
        Ok(())
    }
}
