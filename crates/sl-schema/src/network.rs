//! The canonical network record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{RecordFields, SchemaError, SchemaResult};

/// Highest channel number in the 2.4 GHz band the ESP32 firmware transmits on.
pub const MAX_CHANNEL_2G4: i32 = 11;

/// One scanned access point in canonical form.
///
/// Field order is the serialized key order of skylift JSON files.
/// Deserialization goes through [`Network::from_value`], so aliases and
/// coercion apply there too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Network {
    /// Colon-separated hex octets (not validated).
    pub bssid:       String,
    pub channel:     i32,
    /// Signed metres along the longitude axis from the target.
    pub distance_x:  Option<f64>,
    /// Signed geodesic metres from the target.
    pub distance_xy: Option<f64>,
    /// Signed metres along the latitude axis from the target.
    pub distance_y:  Option<f64>,
    pub lat:         f64,
    pub lon:         f64,
    pub qos:         Option<i32>,
    pub rssi:        i32,
    pub ssid:        String,
}

impl Network {
    const LAT: &'static [&'static str] = &["latitude", "lat"];
    const LON: &'static [&'static str] = &["longitude", "lon"];

    /// Resolve a canonical record from a loosely-shaped JSON object.
    ///
    /// `bssid`, `channel`, and `rssi` are required.  Coordinates accept
    /// `latitude`/`lat` and `longitude`/`lon` and default to `0.0`; `ssid`
    /// defaults to `""` (also when `null`).
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        Self::from_fields(&RecordFields::new(value)?)
    }

    pub fn from_fields(f: &RecordFields<'_>) -> SchemaResult<Self> {
        Ok(Self {
            bssid:       f.require_str("bssid")?,
            channel:     f.require_int("channel")?,
            rssi:        f.require_int("rssi")?,
            lat:         f.f64_or(Self::LAT, 0.0)?,
            lon:         f.f64_or(Self::LON, 0.0)?,
            ssid:        f.optional_str(&["ssid"])?.unwrap_or_default(),
            distance_x:  f.optional_f64(&["distance_x"])?,
            distance_xy: f.optional_f64(&["distance_xy"])?,
            distance_y:  f.optional_f64(&["distance_y"])?,
            qos:         f.optional_int(&["qos"])?,
        })
    }

    /// Channel clamped into the 2.4 GHz band `[0, 11]`.  Does not modify
    /// `self.channel`.
    pub fn channel_2g4(&self) -> i32 {
        self.channel.clamp(0, MAX_CHANNEL_2G4)
    }

    /// BSSID as a C array initializer for firmware sketches:
    /// `"a4:2b:b0:11:22:33"` → `"{0xa4, 0x2b, 0xb0, 0x11, 0x22, 0x33}"`.
    pub fn bssid_ino_literal(&self) -> String {
        let octets: Vec<String> = self.bssid.split(':').map(|o| format!("0x{o}")).collect();
        format!("{{{}}}", octets.join(", "))
    }
}

impl TryFrom<Value> for Network {
    type Error = SchemaError;

    fn try_from(value: Value) -> SchemaResult<Self> {
        Self::from_value(&value)
    }
}
