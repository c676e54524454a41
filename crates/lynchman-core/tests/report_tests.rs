//! Tests for report output
//!
//! Renders real reports into a temporary directory.

use std::fs;
use std::sync::Arc;

use lynchman_core::{
    CutDirection, Difficulty, NoteRecord, NoteType, ReportConfig, Song, SongCollection,
    SongEntry, SongMetadata, page_path, report_json, write_manifest, write_report,
};

fn song(ident: &str, notes: Vec<NoteRecord>) -> Arc<Song> {
    let metadata = SongMetadata {
        beats_per_minute: 128.0,
        beats_per_bar: 4.0,
        note_jump_speed: 16.0,
        shuffle: 0.0,
        shuffle_period: 0.5,
    };
    let entry = SongEntry::new(ident, "Song", Difficulty::Hard, "Hard.json");
    Arc::new(Song::new(entry, "2.0.0", metadata, notes))
}

fn mixed_notes() -> Vec<NoteRecord> {
    vec![
        NoteRecord::new(0.0, 0, 0, NoteType::Left, CutDirection::Down),
        NoteRecord::new(0.5, 3, 2, NoteType::Right, CutDirection::Up),
        NoteRecord::new(1.0, 1, 1, NoteType::Bomb, CutDirection::Any),
        NoteRecord::new(2.0, 2, 0, NoteType::Right, CutDirection::DownLeft),
    ]
}

#[test]
fn test_write_report_creates_all_pages() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("1-a_Song_Hard");
    let song = song("1-a", mixed_notes());

    let paths = write_report(song.as_ref(), &ReportConfig::default(), &base).unwrap();

    assert_eq!(paths.len(), 5);
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(path, &page_path(&base, i));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"), "page {} is not SVG", path.display());
    }
    let summary = fs::read_to_string(&paths[0]).unwrap();
    assert!(summary.contains("beatsPerMinute: 128.00"));
}

#[test]
fn test_write_report_survives_missing_data() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("empty");
    let song = song("1-empty", vec![]);

    let paths = write_report(song.as_ref(), &ReportConfig::default(), &base).unwrap();

    assert_eq!(paths.len(), 5);
    assert!(paths.iter().all(|p| p.exists()));
    let timing = fs::read_to_string(&paths[3]).unwrap();
    assert!(timing.contains("No data"));
}

#[test]
fn test_write_report_for_collection() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("cumul");
    let collection = SongCollection::new(vec![song("1-a", mixed_notes()), song("2-b", mixed_notes())]);

    let paths = write_report(&collection, &ReportConfig::default(), &base).unwrap();
    let summary = fs::read_to_string(&paths[0]).unwrap();
    assert!(summary.contains("songs: 2"));

    let entries: Vec<SongEntry> = collection.iter().map(|s| s.entry().clone()).collect();
    let manifest = dir.path().join("cumul.txt");
    write_manifest(&entries, &manifest).unwrap();
    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        "1-a _ Song _ Hard\n2-b _ Song _ Hard"
    );
}

#[test]
fn test_write_report_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("missing").join("report");
    let song = song("1-a", mixed_notes());

    assert!(write_report(song.as_ref(), &ReportConfig::default(), &base).is_err());
}

#[test]
fn test_report_json_for_collection() {
    let collection = SongCollection::new(vec![song("1-a", mixed_notes())]);
    let json = report_json(&collection, 10).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["songs"], 1);
    assert_eq!(value["summary"]["bomb_notes"], 1);
    assert_eq!(value["note_times"].as_array().unwrap().len(), 4);
    assert_eq!(value["histogram"]["counts"].as_array().unwrap().len(), 10);
}
