use serde::{Deserialize, Serialize};

/// Number of lanes (`_lineIndex` 0..=3)
pub const LINE_COUNT: usize = 4;
/// Number of vertical layers (`_lineLayer` 0..=2)
pub const LAYER_COUNT: usize = 3;

/// Raw `_type` code of a note.
///
/// Codes outside the known set are kept as `Other` so that a level using
/// newer object types still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum NoteType {
    Left,
    Right,
    Bomb,
    Other(i64),
}

impl From<i64> for NoteType {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Right,
            3 => Self::Bomb,
            other => Self::Other(other),
        }
    }
}

impl From<NoteType> for i64 {
    fn from(note_type: NoteType) -> Self {
        match note_type {
            NoteType::Left => 0,
            NoteType::Right => 1,
            NoteType::Bomb => 3,
            NoteType::Other(code) => code,
        }
    }
}

/// Required swing direction (`_cutDirection`).
///
/// `Up` means the block must be cut upwards, i.e. entered from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum CutDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Any,
    Unknown(i64),
}

impl CutDirection {
    /// The nine recognised directions, in code order.
    pub const ALL: [CutDirection; 9] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::Any,
    ];

    /// Bucket index (equal to the code) for recognised directions
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Unknown(_) => None,
            known => Some(i64::from(*known) as usize),
        }
    }

    /// Compass label of the side the block is cut from ("N" = cut from the top).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "S",
            Self::Down => "N",
            Self::Left => "E",
            Self::Right => "W",
            Self::UpLeft => "SE",
            Self::UpRight => "SW",
            Self::DownLeft => "NE",
            Self::DownRight => "NW",
            Self::Any => "*",
            Self::Unknown(_) => "?",
        }
    }
}

impl From<i64> for CutDirection {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            3 => Self::Right,
            4 => Self::UpLeft,
            5 => Self::UpRight,
            6 => Self::DownLeft,
            7 => Self::DownRight,
            8 => Self::Any,
            other => Self::Unknown(other),
        }
    }
}

impl From<CutDirection> for i64 {
    fn from(direction: CutDirection) -> Self {
        match direction {
            CutDirection::Up => 0,
            CutDirection::Down => 1,
            CutDirection::Left => 2,
            CutDirection::Right => 3,
            CutDirection::UpLeft => 4,
            CutDirection::UpRight => 5,
            CutDirection::DownLeft => 6,
            CutDirection::DownRight => 7,
            CutDirection::Any => 8,
            CutDirection::Unknown(code) => code,
        }
    }
}

/// One timed note as stored in a level file.
///
/// `time` is measured in beats, not seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    #[serde(rename = "_time")]
    pub time: f64,
    #[serde(rename = "_lineIndex")]
    pub line_index: i64,
    #[serde(rename = "_lineLayer")]
    pub line_layer: i64,
    #[serde(rename = "_type")]
    pub note_type: NoteType,
    #[serde(rename = "_cutDirection")]
    pub cut_direction: CutDirection,
}

impl NoteRecord {
    pub fn new(
        time: f64,
        line_index: i64,
        line_layer: i64,
        note_type: NoteType,
        cut_direction: CutDirection,
    ) -> Self {
        Self {
            time,
            line_index,
            line_layer,
            note_type,
            cut_direction,
        }
    }

    /// Grid position as `(line_index, line_layer)` when inside the 4x3 grid
    pub fn grid_position(&self) -> Option<(usize, usize)> {
        let index = usize::try_from(self.line_index).ok()?;
        let layer = usize::try_from(self.line_layer).ok()?;
        (index < LINE_COUNT && layer < LAYER_COUNT).then_some((index, layer))
    }
}
