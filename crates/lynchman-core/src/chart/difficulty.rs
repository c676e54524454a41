use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Difficulty tier of a level file. The file stem on disk is the tier name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, IntoStaticStr)]
pub enum Difficulty {
    Easy = 0,
    Normal = 1,
    Hard = 2,
    Expert = 3,
    ExpertPlus = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Expert,
        Self::ExpertPlus,
    ];

    /// Parse a level file stem such as `"ExpertPlus"`. Matching is exact.
    pub fn from_file_stem(stem: &str) -> Option<Self> {
        stem.parse().ok()
    }

    /// Parse a user-supplied tier name, listing the valid names on failure.
    pub fn parse_name(name: &str) -> Result<Self> {
        name.parse().map_err(|_| {
            let valid: Vec<&str> = Self::ALL.iter().map(|d| d.short_name()).collect();
            Error::InvalidDifficulty(format!("{} (expected one of {})", name, valid.join(", ")))
        })
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
