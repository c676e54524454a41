//! Cumulative mode: one report covering every song.

use std::path::Path;

use anyhow::{Result, bail};
use lynchman_core::{
    ReportConfig, SongCollection, SongEntry, Summary, format_summary_console, load_songs,
    write_manifest, write_report,
};
use tracing::{info, warn};

use super::{output_path, write_json};

pub fn run(
    entries: Vec<SongEntry>,
    config: &ReportConfig,
    output_dir: &Path,
    output_filename: &str,
    json: bool,
) -> Result<()> {
    let requested = entries.len();
    let outcome = load_songs(entries);
    if outcome.songs.is_empty() {
        bail!(
            "No songs could be loaded ({} of {} failed)",
            outcome.failures.len(),
            requested
        );
    }

    let collection = SongCollection::new(outcome.songs);
    info!("Analyzing {} songs", collection.len());

    write_report(&collection, config, &output_dir.join(output_filename))?;
    if json {
        write_json(&collection, config.histogram_bins, output_dir, output_filename)?;
    }

    let manifest: Vec<SongEntry> = collection.iter().map(|song| song.entry().clone()).collect();
    let manifest_path = output_path(output_dir, output_filename, "txt");
    write_manifest(&manifest, &manifest_path)?;
    info!("Wrote manifest {}", manifest_path.display());

    match Summary::compute(&collection) {
        Ok(summary) => {
            let title = format!("{} songs", collection.len());
            println!("{}", format_summary_console(&title, &summary));
        }
        Err(e) => warn!("No summary for the collection: {}", e),
    }

    if !outcome.failures.is_empty() {
        warn!(
            "{} of {} level files were skipped",
            outcome.failures.len(),
            requested
        );
    }
    Ok(())
}
