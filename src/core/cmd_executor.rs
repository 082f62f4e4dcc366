use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::video_service::VideoOperation,
};

/// Command executor that routes Elm commands to the services that perform them
#[derive(Clone, Default)]
pub struct CmdExecutor {
    video_sender: Option<mpsc::UnboundedSender<VideoOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a command executor wired to VideoService
    pub fn new_with_video(video_sender: mpsc::UnboundedSender<VideoOperation>) -> Self {
        Self {
            video_sender: Some(video_sender),
            ..Self::default()
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::FetchVideos { request_id, search } => {
                if let Some(video_sender) = &self.video_sender {
                    log::debug!("CmdExecutor: fetching videos {request_id} for {search:?}");
                    video_sender.send(VideoOperation::FetchVideos {
                        request_id: *request_id,
                        search: search.clone(),
                    })?;
                } else {
                    log::warn!("FetchVideos ignored: VideoService not available");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_video_sender: self.video_sender.is_some(),
            is_video_sender_closed: self.video_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_video_sender: bool,
    pub is_video_sender_closed: Option<bool>,
}
