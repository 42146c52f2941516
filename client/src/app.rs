//! Root application component, request orchestration, and accent effect.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::dayboard::DayboardState;
use crate::util::accent;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the request lifecycle signal, provides it to the page, and keeps the
/// page accent in sync with the mood word of the dayboard on screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(DayboardState::default());
    provide_context(state);

    // Only fires when the mood word actually changes.
    let mood_word = Memo::new(move |_| state.with(DayboardState::mood_word));
    Effect::new(move || {
        if let Some(word) = mood_word.get() {
            accent::apply(&word);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dayboard.css"/>
        <Title text="Mood Dayboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Submit `mood` to `/dayboard` and fold the outcome into `state`.
///
/// Overlapping submissions are not serialized: whichever response resolves
/// last decides the final state.
pub fn create_dayboard(state: RwSignal<DayboardState>, mood: String) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("creating dayboard for mood {mood:?}");
        state.update(DayboardState::begin);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::post_dayboard(&mood).await;
            if let Err(e) = &result {
                log::warn!("dayboard request failed: {e}");
            }
            state.update(|s| s.settle(&mood, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, mood);
    }
}
