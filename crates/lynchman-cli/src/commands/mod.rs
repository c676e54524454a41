pub mod cumulative;
pub mod single;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use lynchman_core::{NoteSource, report_json};
use tracing::info;

/// `<dir>/<stem>.<extension>`, without touching dots inside `stem`
pub fn output_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, extension))
}

/// Write the JSON metrics of `source` next to its report
pub fn write_json<S: NoteSource + ?Sized>(
    source: &S,
    bins: usize,
    dir: &Path,
    stem: &str,
) -> Result<()> {
    let path = output_path(dir, stem, "json");
    fs::write(&path, report_json(source, bins)?)?;
    info!("Wrote {}", path.display());
    Ok(())
}
