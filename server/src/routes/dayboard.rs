//! `POST /dayboard` forwarder.
//!
//! The page posts to its own origin; this handler relays the JSON body to the
//! configured dayboard backend and hands back whatever status and body it
//! returns. No dayboard content is produced here.

#[cfg(test)]
#[path = "dayboard_test.rs"]
mod dayboard_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Reasons the forwarder answers on the backend's behalf.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// `DAYBOARD_UPSTREAM_URL` is not set.
    #[error("dayboard upstream not configured")]
    NotConfigured,

    /// The backend could not be reached or timed out.
    #[error("dayboard upstream request failed: {0}")]
    Upstream(reqwest::Error),

    /// The backend's response body could not be read.
    #[error("dayboard upstream body read failed: {0}")]
    Body(reqwest::Error),
}

impl ForwardError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// `POST /dayboard` — relay to `<upstream>/dayboard`.
pub async fn forward_dayboard(State(state): State<AppState>, body: Bytes) -> Result<Response, ForwardError> {
    let Some(upstream) = state.upstream.as_ref() else {
        tracing::warn!("dayboard request received but no upstream is configured");
        return Err(ForwardError::NotConfigured);
    };

    let resp = upstream
        .http
        .post(upstream.dayboard_url())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "dayboard upstream unreachable");
            ForwardError::Upstream(e)
        })?;

    let status = resp.status();
    let bytes = resp.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %status, "dayboard upstream body read failed");
        ForwardError::Body(e)
    })?;
    tracing::debug!(%status, len = bytes.len(), "dayboard upstream responded");

    Ok((status, [(CONTENT_TYPE, "application/json")], bytes).into_response())
}
