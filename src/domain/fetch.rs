use serde::{Deserialize, Serialize};

/// Lifecycle of the home screen's video request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStatus {
    /// Nothing has been requested yet
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

/// Generation number of a video request.
///
/// Every fetch is issued with a fresh id. A response is applied only when its id
/// matches the most recently issued one, so a slow response can never overwrite
/// the result of a newer request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
