pub mod chart;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod song;
pub mod stats;

pub use chart::{
    CategoryCounts, CutDirection, Difficulty, NoteCategory, NoteFilter, NoteRecord, NoteType,
    classify,
};
pub use config::ReportConfig;
pub use discovery::{DiscoveryOptions, discover};
pub use error::{Error, Result};
pub use export::{
    format_song_title, format_summary_console, manifest_text, page_path, report_json,
    write_manifest, write_report,
};
pub use song::{
    LoadOutcome, NoteSource, Song, SongCollection, SongDocument, SongEntry, SongMetadata,
    load_songs,
};
pub use stats::{CutDistribution, DensityGrid, Histogram, Summary, time_series};
