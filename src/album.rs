use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Genres an album must belong to in order to be counted.
pub const GENRES: [&str; 3] = ["Hip-Hop", "Pop", "Jazz"];

static ALBUM_COUNT: AtomicUsize = AtomicUsize::new(0);

/// A single album. Only albums built through [`Album::new`] with a genre from
/// [`GENRES`] add to [`Album::count`], so this type is neither `Clone` nor
/// `Deserialize`.
#[derive(Debug, Serialize)]
pub struct Album {
    genre: String,
    release_date: Option<Value>,
}

impl Album {
    /// Creates an album, counting it if the genre is in [`GENRES`].
    /// Unknown genres are accepted as-is and simply not counted.
    pub fn new(genre: impl Into<String>) -> Self {
        let genre = genre.into();

        if Self::is_listed_genre(&genre) {
            let count = ALBUM_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
            debug!("Counted album in genre '{}' ({} total)", genre, count);
        } else {
            debug!("Genre '{}' is not listed, album not counted", genre);
        }

        Album {
            genre,
            release_date: None,
        }
    }

    /// Case-sensitive exact match against [`GENRES`].
    pub fn is_listed_genre(genre: &str) -> bool {
        GENRES.contains(&genre)
    }

    /// Number of albums created so far in a listed genre.
    pub fn count() -> usize {
        ALBUM_COUNT.load(Ordering::Relaxed)
    }

    /// The genre given to [`Album::new`], listed or not.
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Stores the release date verbatim, replacing any previous one.
    pub fn set_release_date(&mut self, date: impl Into<Value>) {
        self.release_date = Some(date.into());
        debug!(
            "Release date set: {}",
            serde_json::to_string(self).unwrap_or_default()
        );
    }

    /// `None` until a release date has been set.
    pub fn release_date(&self) -> Option<&Value> {
        self.release_date.as_ref()
    }
}
