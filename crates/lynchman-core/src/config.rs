//! Report configuration and constants.
//!
//! - Discovery constants (file extension, ident separator)
//! - Page and chart constants used by the renderer
//! - `ReportConfig` - per-run report settings

/// Level file discovery constants.
pub mod discovery {
    /// Extension of level files.
    pub const SONG_EXTENSION: &str = "json";

    /// Song ident directories must contain this character.
    pub const IDENT_SEPARATOR: char = '-';
}

/// Report page constants.
pub mod report {
    /// Default number of buckets in the timing histogram.
    pub const HISTOGRAM_BINS: usize = 60;

    /// Page size in pixels (width, height).
    pub const PAGE_SIZE: (u32, u32) = (800, 600);

    /// Default base name for cumulative reports.
    pub const CUMULATIVE_BASENAME: &str = "cumul";

    /// Default output directory.
    pub const OUTPUT_DIR: &str = "out";
}

/// Settings for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub histogram_bins: usize,
    pub page_size: (u32, u32),
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            histogram_bins: report::HISTOGRAM_BINS,
            page_size: report::PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_config() {
        let config = ReportConfig::default();
        assert_eq!(config.histogram_bins, 60);
        assert_eq!(config.page_size, (800, 600));
    }
}
