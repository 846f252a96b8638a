//! Great-circle distance via the Haversine formula.

use crate::types::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two coordinates in kilometers.
///
/// Pure and symmetric; returns `0.0` for identical points. Behavior is
/// undefined for NaN or out-of-range latitude/longitude — callers are
/// responsible for only passing finite coordinates.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_have_zero_distance() {
        let p = Coordinate::new(12.9716, 77.5946);
        assert!(distance_km(p, p).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(12.9716, 77.5946);
        let b = Coordinate::new(13.0827, 80.2707);
        let d1 = distance_km(a, b);
        let d2 = distance_km(b, a);
        assert!(
            ((d1 - d2) / d1).abs() < 1e-6,
            "expected symmetry, got {d1} vs {d2}"
        );
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!(
            (d - 111.19).abs() < 0.5,
            "expected roughly 111.19 km, got {d}"
        );
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(
            (d - std::f64::consts::PI * 6371.0).abs() < 1.0,
            "expected half the circumference, got {d}"
        );
    }
}
