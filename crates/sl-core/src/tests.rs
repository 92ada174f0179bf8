//! Unit tests for sl-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, signed_axis_distance};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(30.694, -88.043);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn equator_one_degree_longitude() {
        // Along the equator the geodesic is an arc of radius a.
        let d = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        assert!((d - 111_319.490_8).abs() < 0.01, "got {d}");
    }

    #[test]
    fn meridian_one_degree_latitude() {
        let d = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(1.0, 0.0));
        assert!((d - 110_574.388_6).abs() < 0.01, "got {d}");
    }

    #[test]
    fn flinders_peak_to_buninyong() {
        // Reference pair from Vincenty (1975).
        let flinders = GeoPoint::new(-37.951_033_416_7, 144.424_867_888_9);
        let buninyong = GeoPoint::new(-37.652_821_138_9, 143.926_495_527_8);
        let d = flinders.distance_m(buninyong);
        assert!((d - 54_972.271).abs() < 0.01, "got {d}");
    }

    #[test]
    fn near_antipodal_pairs() {
        // Reference values from GeographicLib (Karney 2013).
        let d = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 179.9));
        assert!((d - 20_003_008.422).abs() < 0.01, "got {d}");

        // Farther along the equator than the equatorial geodesic reaches.
        let quarter = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 90.0));
        let past_pole = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 179.5));
        assert!(past_pole > quarter);
        assert!(d > past_pole);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(51.5007, -0.1246);
        let b = GeoPoint::new(51.5033, -0.1196);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
    }

    #[test]
    fn signed_distance_to_self_is_zero() {
        let p = GeoPoint::new(-33.8568, 151.2153);
        assert_eq!(signed_axis_distance(p, p), 0.0);
    }

    #[test]
    fn signed_distance_directions() {
        let r = GeoPoint::new(30.0, -88.0);
        let north = GeoPoint::new(30.01, -88.0);
        let south = GeoPoint::new(29.99, -88.0);
        let east = GeoPoint::new(30.0, -87.99);
        let west = GeoPoint::new(30.0, -88.01);

        assert!(signed_axis_distance(r, north) > 0.0);
        assert!(signed_axis_distance(r, south) < 0.0);
        assert!(signed_axis_distance(r, east) < 0.0);
        assert!(signed_axis_distance(r, west) > 0.0);
    }

    #[test]
    fn signed_distance_magnitude_matches_geodesic() {
        let r = GeoPoint::new(30.0, -88.0);
        let se = GeoPoint::new(29.995, -87.995);
        assert_eq!(signed_axis_distance(r, se), -r.distance_m(se));
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod rssi {
    use crate::{GeoPoint, estimate_rssi, rssi_for_distance};

    #[test]
    fn bucket_boundaries_fall_to_closer_bucket() {
        assert_eq!(rssi_for_distance(1000.0), -80);
        assert_eq!(rssi_for_distance(500.0), -75);
        assert_eq!(rssi_for_distance(250.0), -65);
        assert_eq!(rssi_for_distance(125.0), -55);
        assert_eq!(rssi_for_distance(50.0), -50);
    }

    #[test]
    fn bucket_interiors() {
        assert_eq!(rssi_for_distance(5000.0), -90);
        assert_eq!(rssi_for_distance(1000.001), -90);
        assert_eq!(rssi_for_distance(750.0), -80);
        assert_eq!(rssi_for_distance(300.0), -75);
        assert_eq!(rssi_for_distance(200.0), -65);
        assert_eq!(rssi_for_distance(60.0), -55);
        assert_eq!(rssi_for_distance(0.0), -50);
    }

    #[test]
    fn monotone_non_increasing() {
        let mut prev = rssi_for_distance(0.0);
        for m in (0..3000).map(|i| i as f64 * 0.5) {
            let r = rssi_for_distance(m);
            assert!(r <= prev, "rssi rose from {prev} to {r} at {m} m");
            prev = r;
        }
    }

    #[test]
    fn antipodal_estimate_is_weakest_bucket() {
        assert_eq!(estimate_rssi(GeoPoint::new(10.0, 20.0), GeoPoint::new(-10.2, -160.1)), -90);
    }

    #[test]
    fn estimate_uses_geodesic_distance() {
        let target = GeoPoint::new(0.0, 0.0);
        // ~111 m north: falls in the 50–125 m bucket.
        let near = GeoPoint::new(0.001, 0.0);
        // ~11 km north.
        let far = GeoPoint::new(0.1, 0.0);
        assert_eq!(estimate_rssi(near, target), -55);
        assert_eq!(estimate_rssi(far, target), -90);
        assert_eq!(estimate_rssi(target, target), -50);
    }
}

#[cfg(test)]
mod date {
    use chrono::NaiveDate;

    use crate::date_stamp;

    #[test]
    fn yyyymmdd_encoding() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_stamp(d), 20_240_307);
        let d = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(date_stamp(d), 19_991_231);
    }

    #[test]
    fn negative_years_encode_as_year_zero() {
        let d = NaiveDate::from_ymd_opt(-44, 3, 15).unwrap();
        assert_eq!(date_stamp(d), 315);
    }
}
