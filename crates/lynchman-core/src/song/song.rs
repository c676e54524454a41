use std::borrow::Cow;
use std::fs;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::chart::{Difficulty, NoteFilter, NoteRecord};
use crate::error::{Error, Result};
use crate::song::{NoteSource, SongEntry, SongMetadata};

/// Level file document as found on disk.
///
/// Every field is optional here so that a missing field is reported as a
/// malformed song rather than a generic JSON error. `_events` and any unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongDocument {
    #[serde(rename = "_version")]
    pub version: Option<String>,
    #[serde(rename = "_beatsPerMinute")]
    pub beats_per_minute: Option<f64>,
    #[serde(rename = "_beatsPerBar")]
    pub beats_per_bar: Option<f64>,
    #[serde(rename = "_noteJumpSpeed")]
    pub note_jump_speed: Option<f64>,
    #[serde(rename = "_shuffle")]
    pub shuffle: Option<f64>,
    #[serde(rename = "_shufflePeriod")]
    pub shuffle_period: Option<f64>,
    #[serde(rename = "_notes")]
    pub notes: Option<Vec<NoteRecord>>,
}

/// One level (song + difficulty) with its notes.
///
/// Filtered views are built once at construction; a `Song` never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Song {
    entry: SongEntry,
    version: String,
    metadata: SongMetadata,
    notes: Vec<NoteRecord>,
    normal: Vec<NoteRecord>,
    left: Vec<NoteRecord>,
    right: Vec<NoteRecord>,
    bomb: Vec<NoteRecord>,
}

impl Song {
    /// Read and parse the level file referenced by `entry`
    pub fn load(entry: SongEntry) -> Result<Self> {
        let content = fs::read_to_string(entry.path())?;
        let song = Self::from_json_str(entry, &content)?;
        debug!("Loaded {} ({} notes)", song.entry, song.notes.len());
        Ok(song)
    }

    pub fn from_json_str(entry: SongEntry, json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::malformed(entry.to_string(), "document is not an object"));
        }
        let document: SongDocument = serde_json::from_value(value)
            .map_err(|e| Error::malformed(entry.to_string(), e.to_string()))?;
        Self::from_document(entry, document)
    }

    pub fn from_document(entry: SongEntry, document: SongDocument) -> Result<Self> {
        let song = entry.to_string();
        let missing = |field: &str| Error::malformed(&song, format!("missing field `{}`", field));

        let version = document.version.ok_or_else(|| missing("_version"))?;
        let metadata = SongMetadata {
            beats_per_minute: document
                .beats_per_minute
                .ok_or_else(|| missing("_beatsPerMinute"))?,
            beats_per_bar: document
                .beats_per_bar
                .ok_or_else(|| missing("_beatsPerBar"))?,
            note_jump_speed: document
                .note_jump_speed
                .ok_or_else(|| missing("_noteJumpSpeed"))?,
            shuffle: document.shuffle.ok_or_else(|| missing("_shuffle"))?,
            shuffle_period: document
                .shuffle_period
                .ok_or_else(|| missing("_shufflePeriod"))?,
        };
        let notes = document.notes.ok_or_else(|| missing("_notes"))?;

        if !(metadata.beats_per_minute.is_finite() && metadata.beats_per_minute > 0.0) {
            return Err(Error::malformed(&song, "_beatsPerMinute must be positive"));
        }
        if !(metadata.beats_per_bar.is_finite() && metadata.beats_per_bar > 0.0) {
            return Err(Error::malformed(&song, "_beatsPerBar must be positive"));
        }

        Ok(Self::new(entry, version, metadata, notes))
    }

    /// Build a song from already validated parts
    pub fn new(
        entry: SongEntry,
        version: impl Into<String>,
        metadata: SongMetadata,
        notes: Vec<NoteRecord>,
    ) -> Self {
        let normal = NoteFilter::Normal.apply(&notes);
        let left = NoteFilter::Left.apply(&notes);
        let right = NoteFilter::Right.apply(&notes);
        let bomb = NoteFilter::Bomb.apply(&notes);

        Self {
            entry,
            version: version.into(),
            metadata,
            notes,
            normal,
            left,
            right,
            bomb,
        }
    }

    /// Cached note view. `All` is the original sequence in file order.
    pub fn notes(&self, filter: NoteFilter) -> &[NoteRecord] {
        match filter {
            NoteFilter::All => &self.notes,
            NoteFilter::Normal => &self.normal,
            NoteFilter::Left => &self.left,
            NoteFilter::Right => &self.right,
            NoteFilter::Bomb => &self.bomb,
        }
    }

    pub fn entry(&self) -> &SongEntry {
        &self.entry
    }

    pub fn ident(&self) -> &str {
        &self.entry.ident
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.entry.difficulty
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn metadata(&self) -> SongMetadata {
        self.metadata
    }

    pub fn beats_per_minute(&self) -> f64 {
        self.metadata.beats_per_minute
    }

    pub fn beats_per_bar(&self) -> f64 {
        self.metadata.beats_per_bar
    }

    pub fn note_jump_speed(&self) -> f64 {
        self.metadata.note_jump_speed
    }

    pub fn shuffle(&self) -> f64 {
        self.metadata.shuffle
    }

    pub fn shuffle_period(&self) -> f64 {
        self.metadata.shuffle_period
    }
}

impl NoteSource for Song {
    fn notes(&self, filter: NoteFilter) -> Cow<'_, [NoteRecord]> {
        Cow::Borrowed(Song::notes(self, filter))
    }

    fn metadata(&self) -> Result<SongMetadata> {
        Ok(self.metadata)
    }

    fn song_count(&self) -> usize {
        1
    }
}

/// Songs that loaded, and the entries that failed with their error
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub songs: Vec<Arc<Song>>,
    pub failures: Vec<(SongEntry, Error)>,
}

/// Load every entry, skipping (and logging) the ones that fail
pub fn load_songs(entries: impl IntoIterator<Item = SongEntry>) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for entry in entries {
        match Song::load(entry.clone()) {
            Ok(song) => outcome.songs.push(Arc::new(song)),
            Err(e) => {
                warn!("Skipping {}: {}", entry, e);
                outcome.failures.push((entry, e));
            }
        }
    }

    outcome
}
