//! The single dayboard page: header, mood form, error banner, result card.

use leptos::prelude::*;

use crate::app::create_dayboard;
use crate::components::dayboard_view::DayboardView;
use crate::components::mood_form::MoodForm;
use crate::components::status_pill::StatusPill;
use crate::state::dayboard::DayboardState;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<DayboardState>>();

    let on_submit = Callback::new(move |mood: String| create_dayboard(state, mood));

    let error = move || state.with(|s| s.error.clone());
    let board = move || state.with(|s| s.data.clone());

    view! {
        <div class="wrap">
            <header>
                <div class="brand">
                    <div class="logo"></div>
                    <h1>"Mood Dayboard"</h1>
                </div>
                <StatusPill/>
            </header>

            <MoodForm on_submit=on_submit/>

            {move || error().map(|message| view! { <div class="card hint error-banner">{message}</div> })}
            {move || board().map(|board| view! { <DayboardView board=board/> })}
        </div>
    }
}
