//! Survey records → distance-sorted canonical networks.

use log::{debug, info};

use sl_core::{GeoPoint, estimate_rssi, signed_axis_distance};
use sl_schema::{Meta, Network};

use crate::{ScanRecord, SurveyFormat};

/// `meta.radius` of converter output.
pub const META_RADIUS: f64 = 1.0;

/// `meta.run` of converter output.
pub const META_RUN: u32 = 1;

/// The result of one conversion run.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    /// Shared by every chunk file of the run.
    pub meta:     Meta,
    /// Sorted by `|distance_xy|`, closest first.
    pub networks: Vec<Network>,
}

/// Places survey records relative to a fixed target point.
#[derive(Copy, Clone, Debug)]
pub struct Converter {
    target: GeoPoint,
    since:  u32,
}

impl Converter {
    /// `since` is the run date as `YYYYMMDD` (see [`sl_core::today_stamp`]).
    pub fn new(target: GeoPoint, since: u32) -> Self {
        Self { target, since }
    }

    pub fn target(&self) -> GeoPoint {
        self.target
    }

    /// Metadata block for a run over a `source_type` survey.
    pub fn meta(&self, source_type: &str) -> Meta {
        Meta {
            comment:     Some(String::new()),
            filepath:    Some(String::new()),
            lat:         Some(self.target.lat),
            lon:         Some(self.target.lon),
            radius:      Some(META_RADIUS),
            run:         Some(META_RUN),
            since:       Some(self.since),
            source_type: Some(source_type.to_owned()),
        }
    }

    /// Canonical record for one survey entry.
    ///
    /// `distance_x` and `distance_y` measure to the points that share the
    /// target's latitude and longitude respectively.
    pub fn network<R: ScanRecord>(&self, rec: &R) -> Network {
        let t = self.target;
        let p = rec.position();

        Network {
            bssid:       rec.bssid().to_owned(),
            channel:     rec.channel(),
            distance_x:  Some(signed_axis_distance(t, GeoPoint::new(t.lat, p.lon))),
            distance_xy: Some(signed_axis_distance(t, p)),
            distance_y:  Some(signed_axis_distance(t, GeoPoint::new(p.lat, t.lon))),
            lat:         p.lat,
            lon:         p.lon,
            qos:         rec.qos(),
            rssi:        estimate_rssi(p, t),
            ssid:        rec.ssid().unwrap_or_default().to_owned(),
        }
    }

    /// Convert every record of an `F` survey and sort closest first.
    pub fn convert<F: SurveyFormat>(&self, records: &[F::Record]) -> Conversion {
        let mut networks: Vec<Network> = records.iter().map(|r| self.network(r)).collect();
        sort_by_distance(&mut networks);

        info!("converted {} {} records around {}", networks.len(), F::TAG, self.target);
        if let (Some(first), Some(last)) = (networks.first(), networks.last()) {
            debug!(
                "closest {} at {:.1} m, farthest {} at {:.1} m",
                first.bssid,
                abs_distance(first),
                last.bssid,
                abs_distance(last),
            );
        }

        Conversion { meta: self.meta(F::TAG), networks }
    }
}

/// Stable sort by `|distance_xy|`, ascending.  Records without a distance go
/// last.
pub fn sort_by_distance(networks: &mut [Network]) {
    networks.sort_by(|a, b| abs_distance(a).total_cmp(&abs_distance(b)));
}

fn abs_distance(n: &Network) -> f64 {
    n.distance_xy.map_or(f64::INFINITY, f64::abs)
}
