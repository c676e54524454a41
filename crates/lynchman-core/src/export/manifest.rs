use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::song::SongEntry;

/// One `"<ident> _ <name> _ <difficulty>"` line per song
pub fn manifest_text(entries: &[SongEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_manifest<P: AsRef<Path>>(entries: &[SongEntry], path: P) -> Result<()> {
    fs::write(path, manifest_text(entries))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;

    #[test]
    fn test_manifest_text() {
        let entries = vec![
            SongEntry::new("1-a", "Alpha", Difficulty::Easy, "a"),
            SongEntry::new("2-b", "Beta", Difficulty::ExpertPlus, "b"),
        ];
        assert_eq!(
            manifest_text(&entries),
            "1-a _ Alpha _ Easy\n2-b _ Beta _ ExpertPlus"
        );
        assert_eq!(manifest_text(&[]), "");
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cumul.txt");
        let entries = vec![SongEntry::new("1-a", "Alpha", Difficulty::Hard, "a")];

        write_manifest(&entries, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1-a _ Alpha _ Hard");
    }
}
