//! Mood-driven accent color.
//!
//! Maps the current mood word to a hex accent and a translucent ring color,
//! then writes both onto the `<html>` element as the `--accent` and `--ring`
//! custom properties the stylesheet reads. Writing requires a browser
//! environment; the lookup itself is pure.

#[cfg(test)]
#[path = "accent_test.rs"]
mod accent_test;

/// Accent used for any mood word without an entry in [`MOOD_ACCENTS`].
pub const FALLBACK_ACCENT: &str = "#6ee7b7";

/// Alpha applied to the accent when deriving the ring color.
const RING_ALPHA: &str = ".35";

/// Known mood words (lowercase) and their accent colors.
pub const MOOD_ACCENTS: [(&str, &str); 5] = [
    ("happy", "#f6c453"),
    ("chill", "#6ee7b7"),
    ("sad", "#93c5fd"),
    ("focused", "#f472b6"),
    ("confident", "#fde047"),
];

/// The pair of style values written for one mood word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccentStyle {
    pub accent: &'static str,
    pub ring: String,
}

/// Look up the accent for `mood`, case-insensitively.
pub fn accent_for(mood: &str) -> &'static str {
    let key = mood.to_lowercase();
    MOOD_ACCENTS
        .iter()
        .find(|(word, _)| *word == key)
        .map_or(FALLBACK_ACCENT, |&(_, color)| color)
}

/// Split `#rrggbb` into its channels.
pub fn hex_channels(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Translucent `rgba(...)` variant of a hex accent.
pub fn ring_for(accent: &str) -> String {
    let (r, g, b) = hex_channels(accent)
        .or_else(|| hex_channels(FALLBACK_ACCENT))
        .unwrap_or_default();
    format!("rgba({r},{g},{b},{RING_ALPHA})")
}

/// Both style values for `mood`.
pub fn accent_style(mood: &str) -> AccentStyle {
    let accent = accent_for(mood);
    AccentStyle { accent, ring: ring_for(accent) }
}

/// Write `--accent` and `--ring` for `mood` onto the document root.
pub fn apply(mood: &str) {
    let style = accent_style(mood);
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let css = root.style();
        let _ = css.set_property("--accent", style.accent);
        let _ = css.set_property("--ring", &style.ring);
        log::debug!("accent set to {} for mood {mood:?}", style.accent);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = style;
    }
}
