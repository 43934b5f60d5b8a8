//! Geodesy utilities: bearing/range and position projection on a
//! spherical earth.
//!
//! Both functions are pure and bit-reproducible for identical inputs.
//! Near-pole longitude scaling is clamped rather than raised as an error,
//! so callers never see a fault from geometry alone.

use tacscope_core::types::GeoPoint;

/// Mean earth radius in nautical miles.
const EARTH_RADIUS_NM: f64 = 3440.065;

/// Nautical miles per degree of latitude.
const NM_PER_DEG_LAT: f64 = 60.0;

/// Floor for cos(latitude) when scaling longitude steps (roughly the value
/// at 89.4 degrees); keeps the projection finite at the poles.
const MIN_COS_LAT: f64 = 0.01;

/// Initial great-circle bearing (degrees in [0, 360)) and haversine range
/// (nautical miles) from `from` to `to`.
pub fn bearing_and_range(from: GeoPoint, to: GeoPoint) -> (f64, f64) {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dlambda = (to.lon - from.lon).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    let bearing_deg = y.atan2(x).to_degrees().rem_euclid(360.0);

    let dphi = phi2 - phi1;
    let h = (dphi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let range_nm = 2.0 * EARTH_RADIUS_NM * h.sqrt().min(1.0).asin();

    (bearing_deg, range_nm)
}

/// Project `from` along `heading_deg` (degrees, 0 = North, clockwise) by
/// `distance_nm`.
///
/// The latitude step is linear (60 NM per degree); the longitude step is
/// scaled by 1/cos(latitude) with the cosine clamped near the poles.
/// Latitude is clamped to [-90, 90] and longitude normalized to
/// [-180, 180).
pub fn advance(from: GeoPoint, heading_deg: f64, distance_nm: f64) -> GeoPoint {
    let heading = heading_deg.to_radians();
    let dlat = distance_nm * heading.cos() / NM_PER_DEG_LAT;
    let cos_lat = from.lat.to_radians().cos().max(MIN_COS_LAT);
    let dlon = distance_nm * heading.sin() / (NM_PER_DEG_LAT * cos_lat);

    let lat = (from.lat + dlat).clamp(-90.0, 90.0);
    let lon = (from.lon + dlon + 180.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);

        let (north, _) = bearing_and_range(origin, GeoPoint::new(1.0, 0.0));
        assert!(north.abs() < 1e-10, "north bearing was {north}");

        let (east, _) = bearing_and_range(origin, GeoPoint::new(0.0, 1.0));
        assert!((east - 90.0).abs() < 1e-10, "east bearing was {east}");

        let (south, _) = bearing_and_range(origin, GeoPoint::new(-1.0, 0.0));
        assert!((south - 180.0).abs() < 1e-10, "south bearing was {south}");

        let (west, _) = bearing_and_range(origin, GeoPoint::new(0.0, -1.0));
        assert!((west - 270.0).abs() < 1e-10, "west bearing was {west}");
    }

    #[test]
    fn test_range_one_degree_latitude() {
        // 1 degree of latitude is 60 NM by definition of the nautical mile;
        // the haversine on the mean-radius sphere lands within a tenth of
        // a mile of that.
        let (_, range) = bearing_and_range(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((range - 60.0).abs() < 0.1, "1 deg lat range was {range}");
    }

    #[test]
    fn test_range_longitude_compression() {
        // At 60N a degree of longitude spans half the distance it does at
        // the equator.
        let (_, at_equator) =
            bearing_and_range(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        let (_, at_60n) =
            bearing_and_range(GeoPoint::new(60.0, 0.0), GeoPoint::new(60.0, 1.0));
        let ratio = at_60n / at_equator;
        assert!((ratio - 0.5).abs() < 0.01, "compression ratio was {ratio}");
    }

    #[test]
    fn test_advance_cardinal_directions() {
        let origin = GeoPoint::new(26.0, 54.0);

        let north = advance(origin, 0.0, 60.0);
        assert!((north.lat - 27.0).abs() < 1e-9);
        assert!((north.lon - 54.0).abs() < 1e-9);

        let east = advance(origin, 90.0, 6.0);
        assert!((east.lat - 26.0).abs() < 1e-9);
        let expected_dlon = 0.1 / 26.0_f64.to_radians().cos();
        assert!((east.lon - (54.0 + expected_dlon)).abs() < 1e-9);
    }

    #[test]
    fn test_advance_roundtrip_with_bearing() {
        // Project out 10 NM on an arbitrary heading, then measure back.
        let start = GeoPoint::new(26.0833, 54.0);
        let end = advance(start, 37.0, 10.0);
        let (bearing, range) = bearing_and_range(start, end);
        assert!((bearing - 37.0).abs() < 0.2, "bearing was {bearing}");
        assert!((range - 10.0).abs() < 0.05, "range was {range}");
    }

    #[test]
    fn test_advance_pole_clamp() {
        // Stepping east almost on the pole stays finite and in bounds.
        let near_pole = GeoPoint::new(89.9, 0.0);
        let p = advance(near_pole, 90.0, 10.0);
        assert!(p.lat.is_finite() && p.lon.is_finite());
        assert!(p.lat <= 90.0);

        let over = advance(GeoPoint::new(89.99, 0.0), 0.0, 60.0);
        assert_eq!(over.lat, 90.0);
    }

    #[test]
    fn test_advance_longitude_wrap() {
        let p = advance(GeoPoint::new(0.0, 179.95), 90.0, 12.0);
        assert!(p.lon < 0.0, "longitude should wrap, was {}", p.lon);
        assert!(p.lon >= -180.0);
    }

    #[test]
    fn test_bit_reproducible() {
        let a = GeoPoint::new(26.0833, 54.0);
        let b = GeoPoint::new(27.25, 55.125);
        assert_eq!(bearing_and_range(a, b), bearing_and_range(a, b));
        let p1 = advance(a, 123.456, 7.89);
        let p2 = advance(a, 123.456, 7.89);
        assert_eq!(p1.lat.to_bits(), p2.lat.to_bits());
        assert_eq!(p1.lon.to_bits(), p2.lon.to_bits());
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let p = GeoPoint::new(26.0833, 54.0);
        let q = advance(p, 270.0, 0.0);
        assert_eq!(p, q);
        let (_, range) = bearing_and_range(p, p);
        assert_eq!(range, 0.0);
    }
}
