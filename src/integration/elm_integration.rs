use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    core::cmd_executor::CmdExecutor,
    core::msg::Msg,
    core::raw_msg::RawMsg,
    core::state::AppState,
    core::translator::translate_raw_to_domain,
    core::update::update,
    domain::fetch::FetchStatus,
    infrastructure::video_service::VideoOperation,
};

/// Owns the application state and runs the translate/update/execute cycle
pub struct ElmRuntime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: Option<mpsc::UnboundedSender<RawMsg>>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl ElmRuntime {
    /// Create a new ElmRuntime
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx: Some(raw_msg_tx),
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new ElmRuntime with command executor
    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(executor);
        runtime
    }

    /// Create a new ElmRuntime whose fetch commands go to VideoService
    pub fn new_with_video_executor(
        initial_state: AppState,
        video_sender: mpsc::UnboundedSender<VideoOperation>,
    ) -> Self {
        Self::new_with_executor(initial_state, CmdExecutor::new_with_video(video_sender))
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_tui_sender(tui_sender);
            Ok(())
        } else {
            Err("No executor available. Use set_executor() first.".to_string())
        }
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> Option<mpsc::UnboundedSender<RawMsg>> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = self.cmd_executor.clone() else {
            return Err(
                "No command executor available. Use set_executor() to configure.".to_string(),
            );
        };

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("ElmRuntime: processing {msg:?}");
        }

        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate one raw message against the current state and apply the result.
    /// The next raw message is translated only after this one has been applied.
    pub fn process_raw_message(&mut self, raw_msg: RawMsg) -> Vec<Cmd> {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
        self.process_queued_messages()
    }

    fn process_queued_messages(&mut self) -> Vec<Cmd> {
        let mut commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            commands.extend(self.process_message(msg));
        }
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        // Domain messages sent directly come first
        let mut all_commands = self.process_queued_messages();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        // Raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> ElmRuntimeStats {
        let has_video_support = self
            .cmd_executor
            .as_ref()
            .map(|executor| executor.get_stats().has_video_sender)
            .unwrap_or(false);

        ElmRuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            videos_count: self.state.home.videos.len(),
            status: self.state.home.status,
            selected_video_index: self.state.home.selected_index,
            has_executor: self.cmd_executor.is_some(),
            has_video_support,
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct ElmRuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub videos_count: usize,
    pub status: FetchStatus,
    pub selected_video_index: Option<usize>,
    pub has_executor: bool,
    pub has_video_support: bool,
}
