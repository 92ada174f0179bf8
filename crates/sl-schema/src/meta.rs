//! Per-file metadata block.

use serde::{Deserialize, Serialize, Serializer};

/// Descriptor carried at the top of every skylift file.
///
/// All fields are optional on input.  Files written by the converter fill
/// every field, with `comment` and `filepath` left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub comment:     Option<String>,
    pub filepath:    Option<String>,
    pub lat:         Option<f64>,
    pub lon:         Option<f64>,
    #[serde(serialize_with = "integral_as_int")]
    pub radius:      Option<f64>,
    pub run:         Option<u32>,
    /// Survey date as `YYYYMMDD`.
    pub since:       Option<u32>,
    #[serde(rename = "type")]
    pub source_type: Option<String>,
}

impl Meta {
    /// Final `/`-separated segment of a non-empty `filepath`.
    pub fn file_name(&self) -> Option<&str> {
        self.filepath
            .as_deref()
            .filter(|p| !p.is_empty())
            .and_then(|p| p.rsplit('/').next())
    }
}

/// Writes whole numbers as JSON integers so `radius: 1.0` stays `1` on disk.
fn integral_as_int<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < 9.0e15 => s.serialize_i64(v as i64),
        Some(v) => s.serialize_f64(v),
        None => s.serialize_none(),
    }
}
