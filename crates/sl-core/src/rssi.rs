//! Coarse RSSI estimate from geodesic distance.
//!
//! The values are a simulation heuristic consumed by the ESP32 firmware, not
//! a propagation model.  Breakpoints must stay exactly as below.

use crate::GeoPoint;

/// `(lower bound in metres, rssi)` steps, checked top-down with a strict
/// `distance > bound` test.
const RSSI_STEPS: [(f64, i32); 5] = [
    (1000.0, -90),
    (500.0, -80),
    (250.0, -75),
    (125.0, -65),
    (50.0, -55),
];

/// RSSI for anything within 50 m.
const RSSI_NEAREST: i32 = -50;

/// Map a distance in metres to its RSSI bucket.
///
/// A distance equal to a breakpoint falls into the closer bucket, so
/// `rssi_for_distance(1000.0) == -80`.
pub fn rssi_for_distance(metres: f64) -> i32 {
    RSSI_STEPS
        .iter()
        .find(|&&(bound, _)| metres > bound)
        .map_or(RSSI_NEAREST, |&(_, rssi)| rssi)
}

/// Estimate the RSSI a receiver at `a` would see from a transmitter at `b`.
pub fn estimate_rssi(a: GeoPoint, b: GeoPoint) -> i32 {
    rssi_for_distance(a.distance_m(b))
}
