//! Header pill mirroring the request lifecycle.

use leptos::prelude::*;

use crate::state::dayboard::{DayboardState, RequestStatus};

/// Shows `Loading…`, `Error`, or `Ready`.
#[component]
pub fn StatusPill() -> impl IntoView {
    let state = expect_context::<RwSignal<DayboardState>>();

    let status = move || state.with(DayboardState::status);
    let status_class = move || match status() {
        RequestStatus::Ready => "pill small status-pill status-pill--ready",
        RequestStatus::Loading => "pill small status-pill status-pill--loading",
        RequestStatus::Error => "pill small status-pill status-pill--error",
    };

    view! { <span class=status_class>{move || status().label()}</span> }
}
