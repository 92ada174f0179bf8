//! Network sets: the downstream container with wifi/bt lists and RSSI query.
//!
//! # Normalization
//!
//! Runs once, in [`NetworkSet::new`]:
//!
//! ```text
//! filename  ← meta.filepath's last segment    (unless given)
//! wifi      ← networks                        (if wifi is empty)
//! wifi, bt  ← stable sort, rssi descending
//! n_wifi    ← wifi.len(),  n_bt ← bt.len()
//! ```
//!
//! Fields are private, so the lists cannot drift from their counts or order
//! after construction.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Meta, Network, SchemaError, SchemaResult};

// ── DeviceType ────────────────────────────────────────────────────────────────

/// Which radio list a query targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceType {
    #[default]
    Wifi,
    Bt,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Wifi => "wifi",
            DeviceType::Bt => "bt",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = SchemaError;

    fn from_str(s: &str) -> SchemaResult<Self> {
        match s {
            "wifi" => Ok(DeviceType::Wifi),
            "bt" => Ok(DeviceType::Bt),
            _ => Err(SchemaError::invalid("device_type", "\"wifi\" or \"bt\"")),
        }
    }
}

// ── NetworkQuery ──────────────────────────────────────────────────────────────

/// Parameters for [`NetworkSet::get_networks`].
///
/// Unset RSSI bounds default to the observed min/max of the selected list,
/// so an empty query returns the whole list.  `max_count` caps the result
/// after filtering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkQuery {
    pub min_rssi:  Option<i32>,
    pub max_rssi:  Option<i32>,
    pub max_count: Option<usize>,
    pub device:    DeviceType,
}

impl NetworkQuery {
    pub fn new(device: DeviceType) -> Self {
        Self { device, ..Self::default() }
    }

    pub fn min_rssi(mut self, rssi: i32) -> Self {
        self.min_rssi = Some(rssi);
        self
    }

    pub fn max_rssi(mut self, rssi: i32) -> Self {
        self.max_rssi = Some(rssi);
        self
    }

    pub fn max_count(mut self, n: usize) -> Self {
        self.max_count = Some(n);
        self
    }
}

// ── NetworkSet ────────────────────────────────────────────────────────────────

/// Unnormalized inputs for a [`NetworkSet`].
#[derive(Clone, Debug, Default)]
pub struct NetworkSetParts {
    pub meta:     Option<Meta>,
    pub networks: Vec<Network>,
    /// Empty means "derive from `meta.filepath`".
    pub filename: String,
    pub wifi:     Vec<Network>,
    pub bt:       Vec<Network>,
}

/// A normalized collection of networks split by radio type.
///
/// Deserialization goes through [`NetworkSet::from_value`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct NetworkSet {
    meta:     Option<Meta>,
    networks: Vec<Network>,
    filename: String,
    n_wifi:   usize,
    n_bt:     usize,
    wifi:     Vec<Network>,
    bt:       Vec<Network>,
}

impl NetworkSet {
    pub fn new(parts: NetworkSetParts) -> Self {
        let NetworkSetParts { meta, networks, mut filename, mut wifi, mut bt } = parts;

        if filename.is_empty() {
            if let Some(name) = meta.as_ref().and_then(Meta::file_name) {
                filename = name.to_owned();
            }
        }

        if wifi.is_empty() && !networks.is_empty() {
            wifi = networks.clone();
        }

        // Stable: equal RSSI keeps input order.
        wifi.sort_by(|a, b| b.rssi.cmp(&a.rssi));
        bt.sort_by(|a, b| b.rssi.cmp(&a.rssi));

        debug!("network set {filename:?}: {} wifi, {} bt", wifi.len(), bt.len());

        Self {
            meta,
            networks,
            filename,
            n_wifi: wifi.len(),
            n_bt: bt.len(),
            wifi,
            bt,
        }
    }

    /// Build from a parsed skylift document.
    ///
    /// `networks` is required; `meta`, `filename`, `wifi`, and `bt` are
    /// optional.  Stored `n_wifi`/`n_bt` are ignored and recomputed.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| SchemaError::invalid("<document>", "a JSON object"))?;

        let meta = match obj.get("meta") {
            None | Some(Value::Null) => None,
            Some(m) => Some(
                Meta::deserialize(m)
                    .map_err(|e| SchemaError::Validation { field: "meta".into(), reason: e.to_string() })?,
            ),
        };

        let networks = match obj.get("networks") {
            Some(v) => network_list(v, "networks")?,
            None => return Err(SchemaError::missing("networks")),
        };
        let wifi = obj.get("wifi").map(|v| network_list(v, "wifi")).transpose()?.unwrap_or_default();
        let bt = obj.get("bt").map(|v| network_list(v, "bt")).transpose()?.unwrap_or_default();

        let filename = match obj.get("filename") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(SchemaError::invalid("filename", "a string")),
        };

        Ok(Self::new(NetworkSetParts { meta, networks, filename, wifi, bt }))
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// The list as supplied, before adoption and sorting.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn n_wifi(&self) -> usize {
        self.n_wifi
    }

    pub fn n_bt(&self) -> usize {
        self.n_bt
    }

    /// Wifi networks, strongest first.
    pub fn wifi(&self) -> &[Network] {
        &self.wifi
    }

    /// Bluetooth devices, strongest first.
    pub fn bt(&self) -> &[Network] {
        &self.bt
    }

    pub fn list(&self, device: DeviceType) -> &[Network] {
        match device {
            DeviceType::Wifi => &self.wifi,
            DeviceType::Bt => &self.bt,
        }
    }

    /// Networks of `query.device` with RSSI in `[min_rssi, max_rssi]`, in
    /// stored order, truncated to `max_count`.
    pub fn get_networks(&self, query: &NetworkQuery) -> Vec<&Network> {
        let nets = self.list(query.device);
        let (Some(lo), Some(hi)) = (
            nets.iter().map(|n| n.rssi).min(),
            nets.iter().map(|n| n.rssi).max(),
        ) else {
            return Vec::new();
        };

        let min_rssi = query.min_rssi.unwrap_or(lo);
        let max_rssi = query.max_rssi.unwrap_or(hi);

        nets.iter()
            .filter(|n| (min_rssi..=max_rssi).contains(&n.rssi))
            .take(query.max_count.unwrap_or(usize::MAX))
            .collect()
    }
}

impl TryFrom<Value> for NetworkSet {
    type Error = SchemaError;

    fn try_from(value: Value) -> SchemaResult<Self> {
        Self::from_value(&value)
    }
}

impl From<NetworkSetParts> for NetworkSet {
    fn from(parts: NetworkSetParts) -> Self {
        Self::new(parts)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn network_list(v: &Value, name: &'static str) -> SchemaResult<Vec<Network>> {
    let items = v.as_array().ok_or_else(|| SchemaError::invalid(name, "an array"))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Network::from_value(item).map_err(|e| e.at(&format!("{name}[{i}]"))))
        .collect()
}
