//! Grid of dayboard images, with text chips for entries that are not images.

#[cfg(test)]
#[path = "image_grid_test.rs"]
mod image_grid_test;

use leptos::prelude::*;

/// How one grid entry renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridCell<'a> {
    Image(&'a str),
    Text(&'a str),
}

/// Remote URLs and inline `data:image` values render as images.
pub fn is_image_source(entry: &str) -> bool {
    entry.starts_with("http") || entry.starts_with("data:image")
}

pub fn classify(entry: &str) -> GridCell<'_> {
    if is_image_source(entry) { GridCell::Image(entry) } else { GridCell::Text(entry) }
}

/// Images load lazily; everything else is a plain tag.
#[component]
pub fn ImageGrid(#[prop(into)] urls: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let cells = urls
        .iter()
        .map(|entry| match classify(entry) {
            GridCell::Image(src) => {
                view! { <img src=src.to_owned() alt=alt.clone() loading="lazy"/> }.into_any()
            }
            GridCell::Text(text) => view! { <div class="tag">{text.to_owned()}</div> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! { <div class="grid">{cells}</div> }
}
