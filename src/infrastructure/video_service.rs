use std::sync::Arc;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use tokio::{sync::mpsc, task::JoinSet};
use tokio_util::sync::CancellationToken;

use crate::{
    domain::fetch::RequestId,
    infrastructure::{token_store::TokenStore, video_api::VideoApi},
    RawMsg,
};

/// Operations accepted by VideoService
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoOperation {
    FetchVideos {
        request_id: RequestId,
        search: String,
    },
}

/// VideoService performs video requests off the UI loop.
///
/// Each fetch runs in its own task and reports back as `RawMsg::VideosLoaded`
/// or `RawMsg::VideosFailed` tagged with the request id it was issued with.
/// Requests are never cancelled when a newer one starts; the update layer
/// drops results that are no longer current.
pub struct VideoService {
    api: VideoApi,
    token_store: Arc<dyn TokenStore>,
    token_name: String,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<VideoOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewVideoService = (
    mpsc::UnboundedSender<VideoOperation>, // op_tx - operations to send
    CancellationToken,                     // shutdown signal
    VideoService,
);

impl VideoService {
    pub fn new(
        api: VideoApi,
        token_store: Arc<dyn TokenStore>,
        token_name: impl Into<String>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> NewVideoService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                api,
                token_store,
                token_name: token_name.into(),
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the VideoService in background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("VideoService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("VideoService error: {e}")));
            }
        });
    }

    /// Main service loop
    async fn run_service(&mut self) -> Result<()> {
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op, &mut in_flight),
                        None => {
                            log::info!("VideoService: operation channel closed");
                            break;
                        }
                    }
                }

                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        log::error!("VideoService: fetch task failed: {e}");
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("VideoService received cancellation signal");
                    break;
                }
            }
        }

        in_flight.abort_all();
        Ok(())
    }

    fn handle_operation(&self, op: VideoOperation, in_flight: &mut JoinSet<()>) {
        log::debug!("Handling VideoOperation: {op:?}");

        match op {
            VideoOperation::FetchVideos { request_id, search } => {
                let api = self.api.clone();
                let token_store = Arc::clone(&self.token_store);
                let token_name = self.token_name.clone();
                let raw_tx = self.raw_tx.clone();

                in_flight.spawn(async move {
                    // Read at request time so a token stored after startup is used
                    let token = token_store.get(&token_name);
                    if token.is_none() {
                        log::warn!("No {token_name} token available, request {request_id} is unauthenticated");
                    }

                    let msg = match api.fetch_videos(&search, token.as_ref()).await {
                        Ok(videos) => {
                            log::info!(
                                "Request {request_id} returned {} videos for {search:?}",
                                videos.len()
                            );
                            RawMsg::VideosLoaded { request_id, videos }
                        }
                        Err(e) => RawMsg::VideosFailed {
                            request_id,
                            reason: format!("{e:#}"),
                        },
                    };
                    let _ = raw_tx.send(msg);
                });
            }
        }
    }
}
