//! Single mode: one report per song.

use std::path::Path;

use anyhow::{Result, bail};
use lynchman_core::{
    ReportConfig, Song, SongEntry, Summary, format_song_title, format_summary_console,
    write_report,
};
use tracing::{error, info, warn};

use super::write_json;

pub fn run(
    entries: Vec<SongEntry>,
    config: &ReportConfig,
    output_dir: &Path,
    json: bool,
) -> Result<()> {
    let requested = entries.len();
    let written = report_all(entries, config, output_dir, json);

    if written == 0 {
        bail!("No reports could be written ({} level files found)", requested);
    }
    if written < requested {
        warn!("{} of {} reports failed", requested - written, requested);
    } else {
        info!("Wrote {} reports", written);
    }
    Ok(())
}

/// Report every entry, logging failures. Returns the number of reports written.
fn report_all(
    entries: Vec<SongEntry>,
    config: &ReportConfig,
    output_dir: &Path,
    json: bool,
) -> usize {
    let mut written = 0;
    for entry in entries {
        let label = entry.to_string();
        match report_song(entry, config, output_dir, json) {
            Ok(()) => written += 1,
            Err(e) => error!("Report for {} failed: {:#}", label, e),
        }
    }
    written
}

fn report_song(
    entry: SongEntry,
    config: &ReportConfig,
    output_dir: &Path,
    json: bool,
) -> Result<()> {
    let stem = entry.output_stem();
    let song = Song::load(entry)?;

    write_report(&song, config, &output_dir.join(&stem))?;
    if json {
        write_json(&song, config.histogram_bins, output_dir, &stem)?;
    }

    let title = format_song_title(song.ident(), song.name(), song.difficulty());
    match Summary::compute(&song) {
        Ok(summary) => println!("{}", format_summary_console(&title, &summary)),
        Err(e) => warn!("No summary for {}: {}", song.entry(), e),
    }
    Ok(())
}
