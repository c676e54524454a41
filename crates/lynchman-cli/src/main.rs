mod cli;
mod commands;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Operation};
use lynchman_core::{ReportConfig, discover};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lynchman_cli=info,lynchman_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Scanning {}...", args.path.display());
    let entries = discover(&args.path, &args.discovery_options())
        .with_context(|| format!("Failed to scan songs folder {}", args.path.display()))?;
    if entries.is_empty() {
        warn!("No level files found in {}", args.path.display());
    } else {
        info!("Found {} level files", entries.len());
    }

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    let config = ReportConfig {
        histogram_bins: args.bins,
        ..Default::default()
    };

    match args.operation {
        Operation::Cumulative => commands::cumulative::run(
            entries,
            &config,
            &args.output_dir,
            &args.output_filename,
            args.json,
        ),
        Operation::Single => commands::single::run(entries, &config, &args.output_dir, args.json),
    }
}
