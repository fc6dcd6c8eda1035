//! # Geographic Utilities
//!
//! Distance computations shared by the route types.
//!
//! All functions expect WGS84 coordinates (latitude/longitude in degrees),
//! which is what GPS receivers, the polyline format, and mapping services use.

use crate::Coordinate;
use geo::{Distance, Haversine, Point};

/// Calculate the great-circle distance between two coordinates using the
/// Haversine formula.
///
/// Returns the distance in meters along the Earth's surface (assuming a
/// spherical Earth with radius 6,371 km).
///
/// # Example
///
/// ```rust
/// use route_overlay::{Coordinate, geo_utils};
///
/// let london = Coordinate::new(51.5074, -0.1278);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = geo_utils::haversine_distance(&london, &paris);
/// assert!((distance - 343_560.0).abs() < 1000.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(p1: &Coordinate, p2: &Coordinate) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Calculate the total length of a route in meters.
///
/// Sums the haversine distance between consecutive points. Empty or
/// single-point sequences return 0.0.
///
/// # Example
///
/// ```rust
/// use route_overlay::{Coordinate, geo_utils};
///
/// let path = vec![
///     Coordinate::new(51.5074, -0.1278),
///     Coordinate::new(51.5080, -0.1290),
///     Coordinate::new(51.5090, -0.1300),
/// ];
///
/// let length = geo_utils::route_length(&path);
/// println!("Path is {:.0} meters long", length);
/// ```
pub fn route_length(points: &[Coordinate]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // London to Paris, ~343.5 km great-circle.
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let d = haversine_distance(&london, &paris);
        assert!(d > 340_000.0 && d < 348_000.0, "got {}", d);
    }

    #[test]
    fn test_zero_distance() {
        let p = Coordinate::new(51.5074, -0.1278);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_route_length_degenerate_inputs() {
        assert_eq!(route_length(&[]), 0.0);
        assert_eq!(route_length(&[Coordinate::new(0.0, 0.0)]), 0.0);
    }

    #[test]
    fn test_route_length_sums_segments() {
        let a = Coordinate::new(51.5074, -0.1278);
        let b = Coordinate::new(51.5080, -0.1290);
        let c = Coordinate::new(51.5090, -0.1300);

        let total = route_length(&[a, b, c]);
        let segments = haversine_distance(&a, &b) + haversine_distance(&b, &c);
        assert!((total - segments).abs() < 1e-9);
    }
}
