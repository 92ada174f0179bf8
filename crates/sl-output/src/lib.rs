//! `sl-output` — chunked skylift file output.
//!
//! A sorted network list is split into groups of at most
//! [`ChunkSize`] networks; each group is written with the shared [`Meta`]
//! to its own file, one file per ESP32 board:
//!
//! ```text
//! out/
//! ├── skylift_1.json   { "meta": …, "networks": [n0 … n19] }
//! ├── skylift_2.json   { "meta": …, "networks": [n20 … n39] }
//! └── skylift_3.json   { "meta": …, "networks": [n40 … n44] }
//! ```
//!
//! The output directory is cleared and recreated once, by
//! [`OutputDir::prepare`], before anything is written.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sl_output::{ChunkSize, write_chunk_files};
//!
//! let files = write_chunk_files(Path::new("./out"), &conv.meta, &conv.networks, ChunkSize::DEFAULT)?;
//! ```
//!
//! [`Meta`]: sl_schema::Meta

pub mod chunk;
pub mod dir;
pub mod error;
pub mod json;
pub mod writer;


use std::path::{Path, PathBuf};

use log::info;

use sl_schema::{Meta, Network};

pub use chunk::{ChunkSize, OutputChunk, chunk_count, chunk_file_name};
pub use dir::OutputDir;
pub use error::{OutputError, OutputResult};
pub use json::JsonDirWriter;
pub use writer::ChunkSink;

/// Split `networks` into chunks of `size` (in order) and hand each to
/// `sink`, numbered from 1.  Returns the number of chunks written.
///
/// An empty `networks` writes nothing.  Only the last chunk can be short;
/// none is ever empty.
pub fn write_chunked<S: ChunkSink>(
    sink: &mut S,
    meta: &Meta,
    networks: &[Network],
    size: ChunkSize,
) -> OutputResult<usize> {
    let mut written = 0;
    for (i, slice) in networks.chunks(size.get()).enumerate() {
        sink.write_chunk(i + 1, &OutputChunk { meta, networks: slice })?;
        written += 1;
    }
    sink.finish()?;
    Ok(written)
}

/// Clear and recreate `dir`, then write `skylift_<i>.json` files into it.
///
/// A failure part-way leaves the files already written in place; rerunning
/// starts from a clean directory again.
pub fn write_chunk_files(
    dir: &Path,
    meta: &Meta,
    networks: &[Network],
    size: ChunkSize,
) -> OutputResult<Vec<PathBuf>> {
    let mut writer = JsonDirWriter::new(OutputDir::prepare(dir)?);
    let n = write_chunked(&mut writer, meta, networks, size)?;
    info!(
        "wrote {} networks to {n} files in {} ({} per file)",
        networks.len(),
        dir.display(),
        size,
    );
    Ok(writer.into_written())
}
