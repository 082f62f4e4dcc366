use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        msg::{home::HomeMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        token_store::TokenStore,
        tui::{Event, Frame, TuiLike},
        video_api::VideoApi,
        video_service::VideoService,
    },
    integration::elm_integration::ElmRuntime,
    presentation::{components::HomeView, theme::Palette},
};

/// Drives the Elm runtime: terminal events and service results in, frames out.
///
/// The runner is generic over the terminal so tests can use `TestTui`.
/// With a finite event source the loop ends once events run out and no fetch
/// is outstanding.
pub struct AppRunner<T: TuiLike> {
    runtime: ElmRuntime,
    tui: T,
    home: HomeView,
    // Results from VideoService
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // For service termination
    video_cancel: CancellationToken,
}

impl<T: TuiLike> AppRunner<T> {
    /// Create a runner and start VideoService in the background.
    /// Must be called inside a tokio runtime.
    pub fn new(config: Config, tui: T, token_store: Arc<dyn TokenStore>) -> Result<Self> {
        let api = VideoApi::new(config.api.endpoint.clone())?;
        Ok(Self::new_with_api(config, tui, api, token_store))
    }

    pub fn new_with_api(
        config: Config,
        tui: T,
        api: VideoApi,
        token_store: Arc<dyn TokenStore>,
    ) -> Self {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();

        let (video_tx, video_cancel, video_service) = VideoService::new(
            api,
            token_store,
            config.api.token_name.clone(),
            raw_tx.clone(),
        );
        video_service.run();

        let mut executor = CmdExecutor::new_with_video(video_tx);
        executor.set_tui_sender(tui_cmd_tx);
        let runtime = ElmRuntime::new_with_executor(AppState::new_with_config(config), executor);

        Self {
            runtime,
            tui,
            home: HomeView::new(),
            raw_tx,
            raw_rx,
            tui_cmd_rx,
            video_cancel,
        }
    }

    /// Start with `search` in the search box; the first fetch uses it
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.runtime
            .send_msg(Msg::Home(HomeMsg::UpdateSearchText(search.into())));
        self
    }

    /// Replace the view, e.g. to pin the date video ages are computed against
    pub fn with_view(mut self, home: HomeView) -> Self {
        self.home = home;
        self
    }

    pub fn runtime(&self) -> &ElmRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut ElmRuntime {
        &mut self.runtime
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Sender for injecting raw messages as if they came from a service
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_tx.clone()
    }

    /// Run the main loop until quit, or until the event source is exhausted
    /// and no fetch is outstanding.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // Fetch on mount
        self.runtime.send_msg(Msg::Home(HomeMsg::FetchVideos));

        let mut events_closed = false;
        loop {
            // Process Elm update cycle and execute commands
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("ElmRuntime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("ElmRuntime error: {e}")));
            }

            // Host-side reactions requested by commands
            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .resize(ratatui::prelude::Rect::new(0, 0, width, height))?;
                    }
                }
            }

            let system = &self.runtime.state().system;
            if system.should_quit {
                break;
            }
            if system.should_suspend {
                self.tui.suspend()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.tui.resume()?;
                continue;
            }

            self.render()?;

            if events_closed && !self.runtime.state().home.is_loading() {
                log::info!("AppRunner: event source closed, stopping");
                break;
            }

            tokio::select! {
                event = self.tui.next(), if !events_closed => {
                    match event {
                        Some(event) => self.handle_event(event),
                        None => events_closed = true,
                    }
                }
                Some(raw) = self.raw_rx.recv() => {
                    self.runtime.send_raw_msg(raw);
                }
                else => break,
            }
        }

        // Shutdown services and exit TUI
        self.video_cancel.cancel();
        self.tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let raw = match event {
            Event::Key(key) => RawMsg::Key(key),
            Event::Paste(text) => RawMsg::Paste(text),
            Event::Resize(w, h) => RawMsg::Resize(w, h),
            Event::Tick => RawMsg::Tick,
            Event::Quit => RawMsg::Quit,
            Event::Closed => {
                log::warn!("AppRunner: terminal event stream closed");
                RawMsg::Quit
            }
            Event::Error => RawMsg::Error("Failed to read terminal event".to_string()),
            // Rendering happens once per loop iteration
            Event::Render | Event::Init | Event::FocusGained | Event::FocusLost => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let palette = Palette::from_dark(state.ui.dark_theme);
        let home = &self.home;
        self.tui
            .draw(&mut |f: &mut Frame<'_>| {
                let area = f.area();
                home.render(f, area, state, &palette);
            })?;
        Ok(())
    }
}
