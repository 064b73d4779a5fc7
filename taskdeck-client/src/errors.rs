//! Error type for task API requests.

use thiserror::Error;

/// Opaque failure from a task API request.
///
/// Connection failures, timeouts, non-success statuses, and body decoding
/// problems all collapse into this one type. Callers get a message to
/// display, not a taxonomy to branch on; there is no local recovery the
/// caller could pick per failure kind.
#[derive(Debug, Error)]
#[error("task api request failed: {reason}")]
pub struct ApiError {
    reason: String,
}

impl ApiError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
