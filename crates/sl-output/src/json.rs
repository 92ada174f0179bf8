//! Pretty-printed JSON file backend.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::debug;

use crate::writer::ChunkSink;
use crate::{OutputChunk, OutputDir, OutputResult};

/// Writes each chunk to `skylift_<index>.json` in a prepared directory,
/// pretty-printed with two-space indentation.
pub struct JsonDirWriter {
    dir:     OutputDir,
    written: Vec<PathBuf>,
}

impl JsonDirWriter {
    pub fn new(dir: OutputDir) -> Self {
        Self { dir, written: Vec::new() }
    }

    /// Files written so far, in index order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl ChunkSink for JsonDirWriter {
    fn write_chunk(&mut self, index: usize, chunk: &OutputChunk<'_>) -> OutputResult<()> {
        let path = self.dir.chunk_path(index);
        let mut out = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut out, chunk)?;
        out.flush()?;

        debug!("wrote {} ({} networks)", path.display(), chunk.networks.len());
        self.written.push(path);
        Ok(())
    }
}
