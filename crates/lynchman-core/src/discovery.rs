//! Level file discovery.
//!
//! Songs are laid out as `<root>/<ident>/<name>/<Difficulty>.json`, where the
//! ident directory name contains a `-` and the file stem is a difficulty name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::chart::Difficulty;
use crate::config::discovery::{IDENT_SEPARATOR, SONG_EXTENSION};
use crate::error::Result;
use crate::song::SongEntry;

/// Filters applied while scanning the songs folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Maximum number of level files to return; `Some(0)` means no limit
    pub limit: Option<usize>,
    /// Only accept this difficulty
    pub difficulty: Option<Difficulty>,
    /// Only accept song names containing this text
    pub filter: Option<String>,
}

impl DiscoveryOptions {
    fn accepts_name(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|filter| name.contains(filter))
    }

    fn accepts_difficulty(&self, difficulty: Difficulty) -> bool {
        self.difficulty.is_none_or(|wanted| wanted == difficulty)
    }

    fn max_entries(&self) -> Option<usize> {
        self.limit.filter(|&limit| limit > 0)
    }

    fn is_full(&self, found: usize) -> bool {
        self.max_entries().is_some_and(|limit| found >= limit)
    }
}

/// Scan `root` for level files.
///
/// Directories are visited in name order. The root itself must be readable;
/// unreadable subdirectories are logged and skipped.
pub fn discover<P: AsRef<Path>>(root: P, options: &DiscoveryOptions) -> Result<Vec<SongEntry>> {
    let root = root.as_ref();
    let mut entries = Vec::new();

    for ident_dir in sorted_children(root)? {
        if options.is_full(entries.len()) {
            break;
        }
        let Some(ident) = file_name(&ident_dir) else {
            continue;
        };
        if !ident.contains(IDENT_SEPARATOR) || !ident_dir.is_dir() {
            continue;
        }

        for name_dir in children_or_warn(&ident_dir) {
            let Some(name) = file_name(&name_dir) else {
                continue;
            };
            if !options.accepts_name(&name) || !name_dir.is_dir() {
                continue;
            }

            for file in children_or_warn(&name_dir) {
                let Some(difficulty) = level_difficulty(&file) else {
                    continue;
                };
                if options.accepts_difficulty(difficulty) {
                    debug!("Found {} {} {}", ident, name, difficulty);
                    entries.push(SongEntry::new(&ident, &name, difficulty, file));
                }
            }
        }
    }

    if let Some(limit) = options.max_entries() {
        entries.truncate(limit);
    }
    Ok(entries)
}

/// Difficulty of a level file, `None` if the path is not one
fn level_difficulty(path: &Path) -> Option<Difficulty> {
    if path.extension()? != SONG_EXTENSION || !path.is_file() {
        return None;
    }
    Difficulty::from_file_stem(path.file_stem()?.to_str()?)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

fn sorted_children(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    children.sort();
    Ok(children)
}

fn children_or_warn(dir: &Path) -> Vec<PathBuf> {
    sorted_children(dir).unwrap_or_else(|e| {
        warn!("Failed to read {}: {}", dir.display(), e);
        Vec::new()
    })
}
