use std::path::{Path, PathBuf};

use crate::chart::Difficulty;

/// Where a level file lives and which song/difficulty it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongEntry {
    pub ident: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub path: PathBuf,
}

impl SongEntry {
    pub fn new(
        ident: impl Into<String>,
        name: impl Into<String>,
        difficulty: Difficulty,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            ident: ident.into(),
            name: name.into(),
            difficulty,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File stem used for per-song outputs: `<ident>_<name>_<difficulty>`
    pub fn output_stem(&self) -> String {
        format!("{}_{}_{}", self.ident, self.name, self.difficulty)
    }
}

impl std::fmt::Display for SongEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} _ {} _ {}", self.ident, self.name, self.difficulty)
    }
}
