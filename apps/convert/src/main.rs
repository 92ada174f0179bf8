//! convert: WiGLE export to skylift chunk files.
//!
//! ```text
//! convert INPUT_FILE OUTPUT_DIR TARGET_LAT TARGET_LONG [NETWORKS_PER_FILE]
//! ```
//!
//! Every network in the export is placed relative to the target, sorted
//! closest first, and written 20 (or `NETWORKS_PER_FILE`) per file as
//! `OUTPUT_DIR/skylift_<n>.json`, one file per ESP32 board.  `OUTPUT_DIR` is
//! deleted and recreated on every run.
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for per-file detail.

mod config;


use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sl_convert::{Converter, Wigle, load_survey_path};
use sl_core::today_stamp;
use sl_output::write_chunk_files;

use config::{Args, RunConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from_args(Args::parse());
    let files = run(&config, today_stamp())?;
    info!("done: {} files in {}", files.len(), config.output_dir.display());
    Ok(())
}

/// One full conversion.  `since` is the `YYYYMMDD` stamp for `meta.since`.
fn run(config: &RunConfig, since: u32) -> Result<Vec<PathBuf>> {
    let records = load_survey_path::<Wigle>(&config.input)
        .with_context(|| format!("reading survey {}", config.input.display()))?;

    let conversion = Converter::new(config.target, since).convert::<Wigle>(&records);

    write_chunk_files(
        &config.output_dir,
        &conversion.meta,
        &conversion.networks,
        config.networks_per_file,
    )
    .with_context(|| format!("writing chunk files to {}", config.output_dir.display()))
}
