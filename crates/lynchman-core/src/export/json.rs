use serde_json::{Map, Value as JsonValue, json};
use tracing::debug;

use crate::chart::NoteFilter;
use crate::error::Result;
use crate::song::NoteSource;
use crate::stats::{CutDistribution, DensityGrid, Histogram, Summary, time_series};

/// Metrics of `source` as pretty JSON.
///
/// Metrics that cannot be computed (for example a summary without normal
/// notes) are written as `null`.
pub fn report_json<S: NoteSource + ?Sized>(source: &S, histogram_bins: usize) -> Result<String> {
    let normal = source.notes(NoteFilter::Normal);
    let bombs = source.notes(NoteFilter::Bomb);
    let all = source.notes(NoteFilter::All);
    let times = time_series(&all);

    let summary = Summary::compute(source)
        .inspect_err(|e| debug!("summary unavailable: {}", e))
        .ok();
    let cut_directions = CutDistribution::from_notes(&normal).ok().map(|distribution| {
        distribution
            .iter()
            .map(|(direction, fraction)| (direction.label().to_string(), json!(fraction)))
            .collect::<Map<String, JsonValue>>()
    });
    let histogram = Histogram::from_series(&times, histogram_bins).ok();

    let report = json!({
        "songs": source.song_count(),
        "summary": summary,
        "normal_density": DensityGrid::from_notes(&normal),
        "bomb_density": DensityGrid::from_notes(&bombs),
        "cut_directions": cut_directions,
        "histogram": histogram,
        "note_times": times,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}
