//! HTTP call to the dayboard endpoint.
//!
//! Client-side (hydrate): a real `fetch` via `gloo-net`.
//! Server-side (SSR): a stub error, since submissions only happen in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result<Dayboard, RequestError>`; non-2xx statuses, transport
//! failures, and undecodable bodies all collapse into `RequestError` so the
//! page can show one message without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::RequestError;
use super::types::Dayboard;
#[cfg(any(test, feature = "hydrate"))]
use super::types::DayboardRequest;

/// Same-origin path of the dayboard endpoint.
pub const DAYBOARD_ENDPOINT: &str = "/dayboard";

#[cfg(any(test, feature = "hydrate"))]
fn dayboard_request(mood: &str) -> DayboardRequest {
    DayboardRequest { mood_word: mood.to_owned() }
}

/// `POST /dayboard` with `{"mood_word": mood}` and decode the response.
///
/// # Errors
///
/// Returns [`RequestError::Status`] for a non-2xx response,
/// [`RequestError::Network`] when the request cannot be sent, and
/// [`RequestError::Decode`] when a 2xx body is not a dayboard.
pub async fn post_dayboard(mood: &str) -> Result<Dayboard, RequestError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(DAYBOARD_ENDPOINT)
            .header("Content-Type", "application/json")
            .json(&dayboard_request(mood))
            .map_err(|e| RequestError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(RequestError::Status { status: resp.status(), status_text: resp.status_text() });
        }
        resp.json::<Dayboard>()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mood;
        Err(RequestError::Network("not available on server".to_owned()))
    }
}
