//! Input adapter traits.
//!
//! A survey format supplies a parser for its document shape and a record
//! type exposing the handful of fields the converter reads.  Records are
//! fully validated when parsed, so conversion itself cannot fail.

use serde_json::Value;

use sl_core::GeoPoint;

use crate::ConvertResult;

/// One scanned network as exposed by an input format.
pub trait ScanRecord {
    /// MAC-like identifier.
    fn bssid(&self) -> &str;

    fn channel(&self) -> i32;

    /// Estimated position of the access point.
    fn position(&self) -> GeoPoint;

    /// Source quality indicator, passed through unchanged.
    fn qos(&self) -> Option<i32>;

    /// Network name, if the source recorded one.
    fn ssid(&self) -> Option<&str>;
}

/// A survey document format.
pub trait SurveyFormat {
    /// Written to `meta.type` of every output file.
    const TAG: &'static str;

    type Record: ScanRecord;

    /// Extract and validate every record in `root`.
    ///
    /// Fails on the first malformed record; nothing is skipped.
    fn records(root: &Value) -> ConvertResult<Vec<Self::Record>>;
}
