//! Typed fetch errors.
//!
//! Only transport and decode failures surface as errors; remote rejections
//! (status >= 400) are folded into a zero-value success inside the client
//! and never reach this type.

use thiserror::Error;

/// Failure of a single fetch attempt. Never fatal to a worker or the pool;
/// it ends up in the owning job's report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request produced no usable response: malformed URL, connection
    /// refused, DNS failure, or timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON for the target shape.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw body kept for diagnostics.
        body: String,
    },
}

impl FetchError {
    /// True for failures that happened before any response body was read.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
