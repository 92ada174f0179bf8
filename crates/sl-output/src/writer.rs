//! The `ChunkSink` trait implemented by chunk destinations.

use crate::{OutputChunk, OutputResult};

/// Receives chunks in order from [`crate::write_chunked`].
pub trait ChunkSink {
    /// Write one chunk.  `index` starts at 1 and increases by one per call.
    fn write_chunk(&mut self, index: usize, chunk: &OutputChunk<'_>) -> OutputResult<()>;

    /// Called once after the last chunk.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
