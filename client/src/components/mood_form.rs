//! Mood input card: one text field plus quick-pick chips.
//!
//! The typed text is local state. Explicit submits (button or Enter) send the
//! trimmed text and are dropped when it is blank; a quick-pick overwrites the
//! field and always sends.

#[cfg(test)]
#[path = "mood_form_test.rs"]
mod mood_form_test;

use leptos::prelude::*;

/// One-click mood shortcuts, in display order.
pub const QUICK_PICKS: [&str; 5] = ["happy", "chill", "sad", "focused", "confident"];

/// Explicit-submit path: hand the trimmed text to `on_submit` unless blank.
pub fn send(raw: &str, on_submit: impl FnOnce(String)) {
    let mood = raw.trim();
    if !mood.is_empty() {
        on_submit(mood.to_owned());
    }
}

/// Quick-pick path: overwrite the field with `word`, then submit it.
pub fn pick(word: &str, field: &mut String, on_submit: impl FnOnce(String)) {
    word.clone_into(field);
    on_submit(word.to_owned());
}

#[component]
pub fn MoodForm(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let do_send = move || send(&input.get_untracked(), |mood| on_submit.run(mood));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let on_pick = move |word: &'static str| {
        let mut picked = None;
        input.update(|field| pick(word, field, |mood| picked = Some(mood)));
        if let Some(mood) = picked {
            on_submit.run(mood);
        }
    };

    view! {
        <section class="card mood-form" aria-labelledby="moodFormTitle">
            <h2 id="moodFormTitle" class="mood-form__title">
                "Describe your mood"
            </h2>
            <label for="mood">"One word"</label>
            <div class="row">
                <input
                    id="mood"
                    type="text"
                    placeholder="happy, sad, chill, ..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button on:click=move |_| do_send()>"Create Dayboard"</button>
            </div>
            <div class="mood-choices" aria-label="Quick choices">
                {QUICK_PICKS
                    .into_iter()
                    .map(|word| {
                        view! {
                            <span class="chip" on:click=move |_| on_pick(word)>
                                {word}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
