//! Request lifecycle for the dayboard page.
//!
//! DESIGN
//! ======
//! One `DayboardState` lives in an `RwSignal` owned by `App`. A submission
//! calls [`DayboardState::begin`] before the request and
//! [`DayboardState::settle`] after it; `settle` is the only place `loading`
//! drops back to `false`, whatever the outcome. A failure keeps the previous
//! dayboard on screen.

#[cfg(test)]
#[path = "dayboard_test.rs"]
mod dayboard_test;

use crate::net::error::RequestError;
use crate::net::types::Dayboard;

/// Owned by `App`, read by every component below it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayboardState {
    pub data: Option<Dayboard>,
    pub loading: bool,
    pub error: Option<String>,
}

/// The status shown in the header pill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Ready,
    Loading,
    Error,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Loading => "Loading…",
            Self::Error => "Error",
        }
    }
}

impl DayboardState {
    /// A request is going out.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fold the outcome of the request for `submitted` into the state.
    pub fn settle(&mut self, submitted: &str, result: Result<Dayboard, RequestError>) {
        match result {
            Ok(board) => {
                self.data = Some(board.with_fallback_mood(submitted));
                self.error = None;
            }
            Err(e) => self.error = Some(e.message()),
        }
        self.loading = false;
    }

    /// Loading wins over error, error wins over ready.
    pub fn status(&self) -> RequestStatus {
        if self.loading {
            RequestStatus::Loading
        } else if self.error.is_some() {
            RequestStatus::Error
        } else {
            RequestStatus::Ready
        }
    }

    /// Mood word of the dayboard on screen, if it has one.
    pub fn mood_word(&self) -> Option<String> {
        self.data
            .as_ref()
            .map(|d| d.mood_word.clone())
            .filter(|w| !w.is_empty())
    }
}
