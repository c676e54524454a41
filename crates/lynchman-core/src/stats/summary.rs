use std::fmt::Write as _;

use serde::Serialize;

use crate::chart::{CategoryCounts, NoteFilter, NoteRecord};
use crate::error::{Error, Result};
use crate::song::{NoteSource, SongMetadata};
use crate::stats::ratio;

/// Text-page metrics of a song or a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub metadata: SongMetadata,
    pub left_notes: usize,
    pub right_notes: usize,
    pub bomb_notes: usize,
    /// `(left - right) / (left + right)`, positive when left-dominant
    pub leaning: f64,
    /// Mean absolute time gap (beats) between consecutive normal notes
    pub mean_note_gap: f64,
}

impl Summary {
    /// Fails with `NoData` when there are no left/right notes or fewer than
    /// two normal notes.
    pub fn compute<S: NoteSource + ?Sized>(source: &S) -> Result<Self> {
        let metadata = source.metadata()?;
        let counts = CategoryCounts::from_notes(&source.notes(NoteFilter::All));
        let leaning = leaning(counts.left, counts.right)?;
        let mean_note_gap = mean_note_gap(&source.notes(NoteFilter::Normal))?;

        Ok(Self {
            metadata,
            left_notes: counts.left,
            right_notes: counts.right,
            bomb_notes: counts.bomb,
            leaning,
            mean_note_gap,
        })
    }

    pub fn normal_notes(&self) -> usize {
        self.left_notes + self.right_notes
    }

    /// Render the summary page text
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let m = &self.metadata;

        let _ = writeln!(text, "beatsPerMinute: {:.2}", m.beats_per_minute);
        let _ = writeln!(text, "beatsPerBar: {:.2}", m.beats_per_bar);
        let _ = writeln!(text, "noteJumpSpeed: {:.2}", m.note_jump_speed);
        let _ = writeln!(text, "shuffle: {:.2}", m.shuffle);
        let _ = writeln!(text, "shufflePeriod: {:.2}", m.shuffle_period);
        let _ = writeln!(text, "total normal notes: {}", self.normal_notes());
        let _ = writeln!(text, "total bombs: {}", self.bomb_notes);
        let _ = writeln!(
            text,
            "notes count (left,right): ({}, {})",
            self.left_notes, self.right_notes
        );
        let _ = writeln!(text, "notes leaning (left+, right-): {:.2}", self.leaning);
        let _ = write!(
            text,
            "average difference in beats between notes: {:.2}",
            self.mean_note_gap
        );

        text
    }
}

/// Left/right balance in `[-1, 1]`
pub fn leaning(left: usize, right: usize) -> Result<f64> {
    let total = left + right;
    if total == 0 {
        return Err(Error::NoData("no left or right notes"));
    }
    ratio(left as f64 - right as f64, total as f64, "normal note count")
}

/// Mean absolute gap between consecutive notes, in the order given.
///
/// Notes are not sorted first, so a view that is not chronological (a
/// collection, or a file stored out of order) includes the backwards jumps.
pub fn mean_note_gap(notes: &[NoteRecord]) -> Result<f64> {
    if notes.len() < 2 {
        return Err(Error::NoData("fewer than two normal notes"));
    }
    let total: f64 = notes
        .windows(2)
        .map(|pair| (pair[1].time - pair[0].time).abs())
        .sum();
    ratio(total, (notes.len() - 1) as f64, "note gap count")
}
