//! Card rendering one fetched dayboard.

use leptos::prelude::*;

use crate::components::image_grid::ImageGrid;
use crate::components::tag_list::TagList;
use crate::net::types::Dayboard;

const COFFEE_ICON: &str = "☕";
const SONG_ICON: &str = "🎵";
const OUTFIT_ICON: &str = "👗";

/// Mood header, coffee pill, songs, outfits, then the image grid.
#[component]
pub fn DayboardView(board: Dayboard) -> impl IntoView {
    let Dayboard { mood_word, coffee, songs, outfits, images } = board;
    let alt = mood_word.clone();

    view! {
        <section class="card dayboard">
            <div class="row dayboard__header">
                <h2>"Your Dayboard"</h2>
                <span class="pill small">"Mood: " <strong>{mood_word}</strong></span>
            </div>

            <div class="divider"></div>

            <div class="result-grid">
                <div>
                    <span class="pill">
                        {COFFEE_ICON} " " <strong class="coffee">{coffee}</strong>
                    </span>
                    <div class="divider"></div>
                    <h3 class="small muted">"Songs"</h3>
                    <TagList items=songs icon=SONG_ICON/>
                    <div class="divider"></div>
                    <h3 class="small muted">"Outfits"</h3>
                    <TagList items=outfits icon=OUTFIT_ICON/>
                </div>
                <div>
                    <ImageGrid urls=images alt=alt/>
                </div>
            </div>
        </section>
    }
}
