use serde::{Deserialize, Serialize};

use crate::domain::{fetch::RequestId, video::Video};

/// Messages specific to HomeState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HomeMsg {
    // Fetching
    /// Fetch with the current search text
    FetchVideos,
    /// Leave the search box and fetch with its text
    SubmitSearch,
    /// Clear the search text and fetch again
    Retry,
    VideosLoaded {
        request_id: RequestId,
        videos: Vec<Video>,
    },
    VideosFailed {
        request_id: RequestId,
        reason: String,
    },

    // Search box editing, never triggers a fetch
    UpdateSearchText(String),
    InsertSearchChar(char),
    DeleteSearchChar,
    FocusSearch,
    BlurSearch,

    CloseBanner,

    // List navigation
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
}
