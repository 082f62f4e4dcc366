use crate::{
    core::{cmd::Cmd, msg::home::HomeMsg},
    domain::{
        fetch::{FetchStatus, RequestId},
        scrollable_list::ScrollableList,
        video::Video,
    },
};

/// State of the home screen: fetched videos, search box, banner and request status
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub videos: Vec<Video>,
    pub search_text: String,
    /// Whether key presses are routed to the search box
    pub search_focused: bool,
    pub status: FetchStatus,
    pub banner_visible: bool,
    pub selected_index: Option<usize>,
    /// Id of the most recently issued request; responses with any other id are stale
    pub latest_request: RequestId,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            videos: vec![],
            search_text: String::new(),
            search_focused: false,
            status: FetchStatus::Idle,
            banner_visible: true,
            selected_index: None,
            latest_request: RequestId::default(),
        }
    }
}

impl HomeState {
    /// Home-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: HomeMsg) -> Vec<Cmd> {
        match msg {
            HomeMsg::FetchVideos => self.begin_fetch(),

            HomeMsg::SubmitSearch => {
                self.search_focused = false;
                self.begin_fetch()
            }

            HomeMsg::Retry => {
                self.search_text.clear();
                self.begin_fetch()
            }

            HomeMsg::VideosLoaded { request_id, videos } => {
                if request_id != self.latest_request {
                    log::debug!(
                        "Discarding stale response {request_id} (latest is {})",
                        self.latest_request
                    );
                    return vec![];
                }

                self.selected_index = if videos.is_empty() { None } else { Some(0) };
                self.videos = videos;
                self.status = FetchStatus::Success;
                vec![]
            }

            HomeMsg::VideosFailed { request_id, reason } => {
                if request_id != self.latest_request {
                    log::debug!(
                        "Discarding stale failure {request_id} (latest is {})",
                        self.latest_request
                    );
                    return vec![];
                }

                // Videos from an earlier success stay behind the failure view
                self.status = FetchStatus::Failure;
                vec![Cmd::LogError {
                    message: format!("Failed to fetch videos: {reason}"),
                }]
            }

            HomeMsg::UpdateSearchText(text) => {
                self.search_text = text;
                vec![]
            }

            HomeMsg::InsertSearchChar(c) => {
                self.search_text.push(c);
                vec![]
            }

            HomeMsg::DeleteSearchChar => {
                self.search_text.pop();
                vec![]
            }

            HomeMsg::FocusSearch => {
                self.search_focused = true;
                vec![]
            }

            HomeMsg::BlurSearch => {
                self.search_focused = false;
                vec![]
            }

            HomeMsg::CloseBanner => {
                self.banner_visible = false;
                vec![]
            }

            HomeMsg::ScrollUp => {
                if self.shows_list() {
                    self.scroll_up();
                }
                vec![]
            }

            HomeMsg::ScrollDown => {
                if self.shows_list() {
                    self.scroll_down();
                }
                vec![]
            }

            HomeMsg::ScrollToTop => {
                if self.shows_list() {
                    self.scroll_to_top();
                }
                vec![]
            }

            HomeMsg::ScrollToBottom => {
                if self.shows_list() {
                    self.scroll_to_bottom();
                }
                vec![]
            }
        }
    }

    fn begin_fetch(&mut self) -> Vec<Cmd> {
        self.status = FetchStatus::Loading;
        self.latest_request = self.latest_request.next();
        vec![Cmd::FetchVideos {
            request_id: self.latest_request,
            search: self.search_text.clone(),
        }]
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Whether the video list branch is on screen
    pub fn shows_list(&self) -> bool {
        self.status == FetchStatus::Success
    }

    /// Retry is offered by the failure view and by the empty results view
    pub fn can_retry(&self) -> bool {
        match self.status {
            FetchStatus::Failure => true,
            FetchStatus::Success => self.videos.is_empty(),
            FetchStatus::Idle | FetchStatus::Loading => false,
        }
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.selected_index.and_then(|i| self.videos.get(i))
    }
}

impl ScrollableList<Video> for HomeState {
    fn select(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    fn selected(&self) -> Option<usize> {
        self.selected_index
    }

    fn len(&self) -> usize {
        self.videos.len()
    }

    fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
