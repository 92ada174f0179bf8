//! Chunk sizing and the per-file document shape.

use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

use sl_schema::{Meta, Network};

/// Maximum networks per output file.  Never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// 20 networks per file, one file per ESP32 board.
    pub const DEFAULT: ChunkSize = ChunkSize(NonZeroUsize::new(20).unwrap());

    /// `None` for zero.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One output file: the shared metadata plus a slice of the sorted list.
#[derive(Debug, Serialize)]
pub struct OutputChunk<'a> {
    pub meta:     &'a Meta,
    pub networks: &'a [Network],
}

/// Number of files `total` networks occupy at `size` per file.
pub fn chunk_count(total: usize, size: ChunkSize) -> usize {
    total.div_ceil(size.get())
}

/// `skylift_<index>.json`, `index` starting at 1.
pub fn chunk_file_name(index: usize) -> String {
    format!("skylift_{index}.json")
}
