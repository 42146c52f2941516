//! Row of labeled chips for songs and outfits.

#[cfg(test)]
#[path = "tag_list_test.rs"]
mod tag_list_test;

use leptos::prelude::*;

/// Chip text: the entry, prefixed by the icon when there is one.
pub fn chip_label(icon: Option<&str>, text: &str) -> String {
    match icon {
        Some(icon) if !icon.is_empty() => format!("{icon} {text}"),
        _ => text.to_owned(),
    }
}

/// One `.tag` per entry; an empty list renders an empty row.
#[component]
pub fn TagList(#[prop(into)] items: Vec<String>, #[prop(optional, into)] icon: Option<String>) -> impl IntoView {
    let tags = items
        .iter()
        .map(|item| view! { <span class="tag">{chip_label(icon.as_deref(), item)}</span> })
        .collect::<Vec<_>>();

    view! { <div class="tags">{tags}</div> }
}
