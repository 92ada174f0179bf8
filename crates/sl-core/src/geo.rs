//! Geographic coordinate type and geodesic distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances are geodesics on the
//! WGS-84 ellipsoid (Karney's algorithm via `geo::Geodesic`), which converges
//! for every pair of points, antipodal ones included.

use ::geo::{Distance, Geodesic, Point};

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Ellipsoidal geodesic distance in metres.
    ///
    /// Coordinates are not range-checked; NaN in, NaN out.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        if self == other {
            return 0.0;
        }
        Geodesic::distance(Point::from(self), Point::from(other))
    }
}

impl From<GeoPoint> for Point<f64> {
    /// `geo` points are `(x, y)` = `(lon, lat)`.
    fn from(p: GeoPoint) -> Self {
        Point::new(p.lon, p.lat)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Geodesic distance from `reference` to `other`, negated when `other` lies
/// south of or east of `reference`.
///
/// This is a directional tag on the full distance, not a projection onto an
/// axis.  Callers get per-axis components by passing points that differ from
/// `reference` in one coordinate only.
pub fn signed_axis_distance(reference: GeoPoint, other: GeoPoint) -> f64 {
    let d = reference.distance_m(other);
    if other.lat < reference.lat || other.lon > reference.lon {
        -d
    } else {
        d
    }
}
