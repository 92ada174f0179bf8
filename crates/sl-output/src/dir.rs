//! Output directory lifecycle.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{OutputError, OutputResult, chunk_file_name};

/// An output directory that has been cleared and recreated for this run.
///
/// Existing contents are deleted recursively; nothing from a previous run
/// survives.  The clear is not atomic with respect to outside readers.
#[derive(Debug)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Delete `path` if it exists, then create it (and any parents).
    pub fn prepare(path: impl Into<PathBuf>) -> OutputResult<Self> {
        let path = path.into();

        match fs::remove_dir_all(&path) {
            Ok(()) => debug!("cleared {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(OutputError::PrepareDir { path, source }),
        }

        if let Err(source) = fs::create_dir_all(&path) {
            return Err(OutputError::PrepareDir { path, source });
        }
        debug!("created {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the 1-based `index`th chunk file.
    pub fn chunk_path(&self, index: usize) -> PathBuf {
        self.path.join(chunk_file_name(index))
    }
}
