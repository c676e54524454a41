use std::borrow::Cow;
use std::sync::Arc;

use crate::chart::{NoteFilter, NoteRecord};
use crate::error::{Error, Result};
use crate::song::{NoteSource, Song, SongMetadata};
use crate::stats::ratio;

/// A fixed, ordered group of songs analysed together.
///
/// Metadata accessors return the arithmetic mean over member songs and are
/// recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct SongCollection {
    songs: Vec<Arc<Song>>,
}

impl SongCollection {
    pub fn new(songs: Vec<Arc<Song>>) -> Self {
        Self { songs }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> &[Arc<Song>] {
        &self.songs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter().map(|song| song.as_ref())
    }

    /// Concatenation of every member's view, in song order.
    ///
    /// The result is not sorted by time: note times restart in every song, so
    /// callers that need a chronological order must sort it themselves.
    pub fn notes(&self, filter: NoteFilter) -> Vec<NoteRecord> {
        self.songs
            .iter()
            .flat_map(|song| song.notes(filter).iter().copied())
            .collect()
    }

    pub fn mean_beats_per_minute(&self) -> Result<f64> {
        self.mean_of(Song::beats_per_minute)
    }

    pub fn mean_beats_per_bar(&self) -> Result<f64> {
        self.mean_of(Song::beats_per_bar)
    }

    pub fn mean_note_jump_speed(&self) -> Result<f64> {
        self.mean_of(Song::note_jump_speed)
    }

    pub fn mean_shuffle(&self) -> Result<f64> {
        self.mean_of(Song::shuffle)
    }

    pub fn mean_shuffle_period(&self) -> Result<f64> {
        self.mean_of(Song::shuffle_period)
    }

    /// All five means at once
    pub fn mean_metadata(&self) -> Result<SongMetadata> {
        Ok(SongMetadata {
            beats_per_minute: self.mean_beats_per_minute()?,
            beats_per_bar: self.mean_beats_per_bar()?,
            note_jump_speed: self.mean_note_jump_speed()?,
            shuffle: self.mean_shuffle()?,
            shuffle_period: self.mean_shuffle_period()?,
        })
    }

    fn mean_of(&self, field: impl Fn(&Song) -> f64) -> Result<f64> {
        if self.songs.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let sum: f64 = self.songs.iter().map(|song| field(song)).sum();
        ratio(sum, self.songs.len() as f64, "song count")
    }
}

impl FromIterator<Arc<Song>> for SongCollection {
    fn from_iter<I: IntoIterator<Item = Arc<Song>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl NoteSource for SongCollection {
    fn notes(&self, filter: NoteFilter) -> Cow<'_, [NoteRecord]> {
        Cow::Owned(SongCollection::notes(self, filter))
    }

    fn metadata(&self) -> Result<SongMetadata> {
        self.mean_metadata()
    }

    fn song_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{CutDirection, Difficulty, NoteType};
    use crate::song::SongEntry;

    fn make_song(name: &str, bpm: f64, njs: f64, notes: Vec<NoteRecord>) -> Arc<Song> {
        let metadata = SongMetadata {
            beats_per_minute: bpm,
            beats_per_bar: 4.0,
            note_jump_speed: njs,
            shuffle: 0.0,
            shuffle_period: 0.5,
        };
        let entry = SongEntry::new(format!("1-{}", name), name, Difficulty::Expert, "x.json");
        Arc::new(Song::new(entry, "2.0.0", metadata, notes))
    }

    fn note(time: f64, note_type: NoteType) -> NoteRecord {
        NoteRecord::new(time, 0, 0, note_type, CutDirection::Down)
    }

    #[test]
    fn test_empty_collection_means_fail() {
        let collection = SongCollection::default();
        assert_eq!(collection.len(), 0);
        assert!(matches!(
            collection.mean_beats_per_minute(),
            Err(Error::EmptyCollection)
        ));
        assert!(matches!(
            collection.mean_shuffle_period(),
            Err(Error::EmptyCollection)
        ));
        assert!(matches!(
            NoteSource::metadata(&collection),
            Err(Error::EmptyCollection)
        ));
        assert!(collection.notes(NoteFilter::All).is_empty());
    }

    #[test]
    fn test_single_song_mean_is_exact() {
        let song = make_song("a", 173.37, 17.1, vec![]);
        let collection = SongCollection::new(vec![song.clone()]);

        assert_eq!(
            collection.mean_beats_per_minute().unwrap().to_bits(),
            song.beats_per_minute().to_bits()
        );
        assert_eq!(
            collection.mean_note_jump_speed().unwrap().to_bits(),
            song.note_jump_speed().to_bits()
        );
    }

    #[test]
    fn test_means_over_songs() {
        let collection = SongCollection::new(vec![
            make_song("a", 100.0, 10.0, vec![]),
            make_song("b", 200.0, 20.0, vec![]),
            make_song("c", 150.0, 15.0, vec![]),
        ]);

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.mean_beats_per_minute().unwrap(), 150.0);
        assert_eq!(collection.mean_note_jump_speed().unwrap(), 15.0);
        assert_eq!(collection.mean_beats_per_bar().unwrap(), 4.0);
        assert_eq!(collection.mean_shuffle().unwrap(), 0.0);
    }

    #[test]
    fn test_notes_concatenate_in_song_order() {
        let collection = SongCollection::new(vec![
            make_song(
                "a",
                120.0,
                10.0,
                vec![note(5.0, NoteType::Left), note(6.0, NoteType::Bomb)],
            ),
            make_song(
                "b",
                120.0,
                10.0,
                vec![note(1.0, NoteType::Right), note(2.0, NoteType::Left)],
            ),
        ]);

        let times: Vec<f64> = collection
            .notes(NoteFilter::Normal)
            .iter()
            .map(|n| n.time)
            .collect();
        assert_eq!(times, vec![5.0, 1.0, 2.0]);
        assert_eq!(collection.notes(NoteFilter::All).len(), 4);
        assert_eq!(collection.notes(NoteFilter::Bomb).len(), 1);
        assert_eq!(collection.notes(NoteFilter::Left).len(), 2);
    }

    #[test]
    fn test_shares_songs() {
        let song = make_song("a", 120.0, 10.0, vec![note(0.0, NoteType::Left)]);
        let collection: SongCollection = vec![song.clone(), song.clone()].into_iter().collect();

        assert_eq!(collection.len(), 2);
        assert_eq!(Arc::strong_count(&song), 3);
        assert_eq!(collection.iter().count(), 2);
    }
}
