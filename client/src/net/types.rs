//! Wire types for the `/dayboard` endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /dayboard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayboardRequest {
    pub mood_word: String,
}

/// The bundle returned by the dayboard backend for one mood word.
///
/// Every field tolerates absence on the wire; a missing or `null`
/// `mood_word` decodes to an empty string so the caller can substitute the
/// submitted word (see [`Dayboard::with_fallback_mood`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dayboard {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mood_word: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coffee: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub songs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outfits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Dayboard {
    /// Replace an empty `mood_word` with the word the user submitted.
    #[must_use]
    pub fn with_fallback_mood(mut self, submitted: &str) -> Self {
        if self.mood_word.is_empty() {
            submitted.clone_into(&mut self.mood_word);
        }
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
