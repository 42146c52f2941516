//! Failure type for the dayboard request.
//!
//! Every variant ends up as a human-readable string in the UI error banner;
//! nothing is retried or classified further.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when a failure renders to an empty string.
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// Something went wrong visiting `/dayboard`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered with a non-2xx status.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never completed (connectivity, CORS, aborted fetch).
    #[error("{0}")]
    Network(String),

    /// The 2xx body was not a dayboard JSON document.
    #[error("{0}")]
    Decode(String),
}

impl RequestError {
    /// Text stored as UI error state.
    pub fn message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() { FALLBACK_MESSAGE.to_owned() } else { text }
    }
}
