//! Command-line arguments and the resolved run configuration.

use std::path::PathBuf;

use clap::Parser;
use log::warn;

use sl_core::GeoPoint;
use sl_output::ChunkSize;

#[derive(Parser, Debug)]
#[command(
    name = "convert",
    version,
    about = "Convert a WiGLE export into chunked skylift JSON files",
    allow_negative_numbers = true
)]
pub struct Args {
    /// WiGLE search API export (JSON with a top-level `results` array)
    pub input_file: PathBuf,

    /// Directory for skylift_<n>.json files; deleted and recreated
    pub output_dir: PathBuf,

    /// Target latitude in decimal degrees
    pub target_lat: f64,

    /// Target longitude in decimal degrees
    pub target_long: f64,

    /// Networks per output file (one file per ESP32 board) [default: 20]
    pub networks_per_file: Option<String>,
}

/// Everything one conversion run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub input:             PathBuf,
    pub output_dir:        PathBuf,
    pub target:            GeoPoint,
    pub networks_per_file: ChunkSize,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Self {
        Self {
            input:             args.input_file,
            output_dir:        args.output_dir,
            target:            GeoPoint::new(args.target_lat, args.target_long),
            networks_per_file: parse_networks_per_file(args.networks_per_file.as_deref()),
        }
    }
}

/// Lenient: anything that is not a positive integer falls back to the
/// default with a warning.
pub fn parse_networks_per_file(raw: Option<&str>) -> ChunkSize {
    let Some(raw) = raw else {
        return ChunkSize::DEFAULT;
    };
    match raw.trim().parse::<usize>().ok().and_then(ChunkSize::new) {
        Some(size) => size,
        None => {
            warn!("NETWORKS_PER_FILE {raw:?} is not a positive integer, using {}", ChunkSize::DEFAULT);
            ChunkSize::DEFAULT
        }
    }
}
