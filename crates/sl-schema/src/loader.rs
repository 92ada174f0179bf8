//! Skylift JSON file loader.
//!
//! Reads any skylift document (a converter chunk file or a hand-assembled
//! set with separate `wifi`/`bt` lists) into a normalized [`NetworkSet`].

use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::{NetworkSet, SchemaError, SchemaResult};

/// Load a [`NetworkSet`] from a skylift JSON file.
pub fn load_network_set_path(path: &Path) -> SchemaResult<NetworkSet> {
    debug!("loading network set from {}", path.display());
    let file = std::fs::File::open(path).map_err(SchemaError::Io)?;
    load_network_set_reader(BufReader::new(file))
}

/// Like [`load_network_set_path`] but accepts any `Read` source.
pub fn load_network_set_reader<R: Read>(reader: R) -> SchemaResult<NetworkSet> {
    let root: Value = serde_json::from_reader(reader)?;
    NetworkSet::from_value(&root)
}
