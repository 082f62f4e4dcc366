use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::{fetch::RequestId, video::Video};

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Paste(String),

    // Network results from VideoService
    VideosLoaded {
        request_id: RequestId,
        videos: Vec<Video>,
    },
    VideosFailed {
        request_id: RequestId,
        reason: String,
    },

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick)
    }
}
