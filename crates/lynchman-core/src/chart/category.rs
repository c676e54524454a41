use crate::chart::{NoteRecord, NoteType};

/// Classification bucket of a note. NORMAL is not a bucket of its own: it is
/// the union of `Left` and `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteCategory {
    Left,
    Right,
    Bomb,
}

impl NoteCategory {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Map a note to its category. Unrecognised types are excluded (`None`) and
/// only ever show up in the unfiltered view.
pub fn classify(note: &NoteRecord) -> Option<NoteCategory> {
    match note.note_type {
        NoteType::Left => Some(NoteCategory::Left),
        NoteType::Right => Some(NoteCategory::Right),
        NoteType::Bomb => Some(NoteCategory::Bomb),
        NoteType::Other(_) => None,
    }
}

/// Selects one of the note views exposed by songs and collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteFilter {
    #[default]
    All,
    Normal,
    Left,
    Right,
    Bomb,
}

impl NoteFilter {
    pub fn matches(&self, note: &NoteRecord) -> bool {
        let category = classify(note);
        match self {
            Self::All => true,
            Self::Normal => category.is_some_and(|c| c.is_normal()),
            Self::Left => category == Some(NoteCategory::Left),
            Self::Right => category == Some(NoteCategory::Right),
            Self::Bomb => category == Some(NoteCategory::Bomb),
        }
    }

    /// Keep the notes matching this filter, preserving their order
    pub fn apply(&self, notes: &[NoteRecord]) -> Vec<NoteRecord> {
        notes.iter().filter(|n| self.matches(n)).copied().collect()
    }
}

/// Per-category note counts built by folding over a note sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub left: usize,
    pub right: usize,
    pub bomb: usize,
    pub excluded: usize,
}

impl CategoryCounts {
    pub fn from_notes(notes: &[NoteRecord]) -> Self {
        notes.iter().fold(Self::default(), |counts, note| counts.add(note))
    }

    /// Return the counts with `note` accounted for
    pub fn add(self, note: &NoteRecord) -> Self {
        match classify(note) {
            Some(NoteCategory::Left) => Self {
                left: self.left + 1,
                ..self
            },
            Some(NoteCategory::Right) => Self {
                right: self.right + 1,
                ..self
            },
            Some(NoteCategory::Bomb) => Self {
                bomb: self.bomb + 1,
                ..self
            },
            None => Self {
                excluded: self.excluded + 1,
                ..self
            },
        }
    }

    pub fn normal(&self) -> usize {
        self.left + self.right
    }

    pub fn total(&self) -> usize {
        self.normal() + self.bomb + self.excluded
    }
}
