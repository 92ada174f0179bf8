//! WiGLE search API export.
//!
//! ```json
//! { "success": true, "totalResults": 2,
//!   "results": [
//!     { "netid": "a4:2b:b0:11:22:33", "ssid": "cafe", "channel": 6,
//!       "trilat": 40.7128, "trilong": -74.0060, "qos": 2, ... },
//!     ...
//!   ] }
//! ```
//!
//! Only the fields below are read; everything else is ignored.

use serde_json::Value;

use sl_core::GeoPoint;
use sl_schema::{RecordFields, SchemaError};

use crate::{ConvertError, ConvertResult, ScanRecord, SurveyFormat};

/// Marker type for the WiGLE format.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wigle;

/// One entry of a WiGLE `results` array.
#[derive(Clone, Debug, PartialEq)]
pub struct WigleRecord {
    pub netid:    String,
    pub channel:  i32,
    pub trilat:   f64,
    pub trilong:  f64,
    pub qos:      Option<i32>,
    pub ssid:     Option<String>,
}

impl WigleRecord {
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let f = RecordFields::new(value)?;
        Ok(Self {
            netid:   f.require_str("netid")?,
            channel: f.require_int("channel")?,
            trilat:  f.require_f64("trilat")?,
            trilong: f.require_f64("trilong")?,
            qos:     f.require_nullable_int("qos")?,
            ssid:    f.optional_str(&["ssid"])?,
        })
    }
}

impl ScanRecord for WigleRecord {
    fn bssid(&self) -> &str {
        &self.netid
    }

    fn channel(&self) -> i32 {
        self.channel
    }

    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.trilat, self.trilong)
    }

    fn qos(&self) -> Option<i32> {
        self.qos
    }

    fn ssid(&self) -> Option<&str> {
        self.ssid.as_deref()
    }
}

impl SurveyFormat for Wigle {
    const TAG: &'static str = "wigle";

    type Record = WigleRecord;

    fn records(root: &Value) -> ConvertResult<Vec<WigleRecord>> {
        let results = root
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| ConvertError::MalformedInput("missing top-level `results` array".into()))?;

        results
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                WigleRecord::from_value(rec)
                    .map_err(|e| ConvertError::MalformedInput(e.at(&format!("results[{i}]")).to_string()))
            })
            .collect()
    }
}
