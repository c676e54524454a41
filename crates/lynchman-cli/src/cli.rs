//! CLI argument definitions for lynchman.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lynchman_core::config::report;
use lynchman_core::{Difficulty, DiscoveryOptions};

#[derive(Parser, Debug)]
#[command(name = "lynchman")]
#[command(about = "Statistics and charts for rhythm-game level files", version)]
pub struct Args {
    /// Custom songs folder to analyze
    #[arg(long, env = "LYNCHMAN_SONGS_PATH")]
    pub path: PathBuf,

    /// Number of songs to analyze (0 or negative for no limit)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Only analyze this difficulty (Easy, Normal, Hard, Expert, ExpertPlus)
    #[arg(long, value_parser = Difficulty::parse_name)]
    pub difficulty: Option<Difficulty>,

    /// Only analyze songs whose name contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// One report for all songs, or one report per song
    #[arg(long, value_enum, default_value = "cumulative")]
    pub operation: Operation,

    /// Base name of the cumulative report
    #[arg(long, visible_alias = "output_filename", default_value = report::CUMULATIVE_BASENAME)]
    pub output_filename: String,

    /// Directory receiving the reports
    #[arg(long, default_value = report::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of buckets in the timing histogram
    #[arg(long, default_value_t = report::HISTOGRAM_BINS)]
    pub bins: usize,

    /// Also write the metrics as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Aggregate every song into one report
    Cumulative,
    /// Write one report per song
    Single,
}

impl Args {
    /// Discovery filters; a zero or negative limit means no limit
    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            limit: self.limit.and_then(|limit| usize::try_from(limit).ok()),
            difficulty: self.difficulty,
            filter: self.filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["lynchman", "--path", "songs"]).unwrap();

        assert_eq!(args.path, PathBuf::from("songs"));
        assert_eq!(args.operation, Operation::Cumulative);
        assert_eq!(args.output_filename, "cumul");
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.bins, 60);
        assert!(!args.json);
        assert_eq!(args.discovery_options(), DiscoveryOptions::default());
    }

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "lynchman",
            "--path",
            "songs",
            "--limit",
            "10",
            "--difficulty",
            "ExpertPlus",
            "--filter",
            "Remix",
            "--operation",
            "single",
            "--output-filename",
            "all",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.operation, Operation::Single);
        assert_eq!(args.output_filename, "all");
        assert!(args.json);

        let options = args.discovery_options();
        assert_eq!(options.limit, Some(10));
        assert_eq!(options.difficulty, Some(Difficulty::ExpertPlus));
        assert_eq!(options.filter.as_deref(), Some("Remix"));
    }

    #[test]
    fn test_negative_limit_means_unlimited() {
        let args = Args::try_parse_from(["lynchman", "--path", "s", "--limit", "-1"]).unwrap();
        assert_eq!(args.limit, Some(-1));
        assert_eq!(args.discovery_options().limit, None);
    }

    #[test]
    fn test_output_filename_alias() {
        let args =
            Args::try_parse_from(["lynchman", "--path", "s", "--output_filename", "x"]).unwrap();
        assert_eq!(args.output_filename, "x");
    }

    #[test]
    fn test_invalid_difficulty_fails() {
        let result = Args::try_parse_from(["lynchman", "--path", "s", "--difficulty", "Insane"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_operation_fails() {
        let result = Args::try_parse_from(["lynchman", "--path", "s", "--operation", "merge"]);
        assert!(result.is_err());
    }
}
