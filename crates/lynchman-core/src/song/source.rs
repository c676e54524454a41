use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::chart::{NoteFilter, NoteRecord};
use crate::error::Result;

/// Tempo and timing metadata of a level, or the mean over several levels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SongMetadata {
    pub beats_per_minute: f64,
    pub beats_per_bar: f64,
    pub note_jump_speed: f64,
    pub shuffle: f64,
    pub shuffle_period: f64,
}

/// Anything the statistics can be computed from: a single song or a
/// collection of songs.
pub trait NoteSource {
    /// Notes in the requested view, in source order
    fn notes(&self, filter: NoteFilter) -> Cow<'_, [NoteRecord]>;

    /// Metadata of the source. Fails for sources that have none (an empty
    /// collection).
    fn metadata(&self) -> Result<SongMetadata>;

    /// Number of songs the source covers
    fn song_count(&self) -> usize;
}
