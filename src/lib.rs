//! # Route Overlay
//!
//! Encoded-polyline decoding and route overlay management for map applications.
//!
//! This library provides:
//! - A decoder and encoder for Google's encoded-polyline format
//! - A route overlay manager that tracks the currently displayed route
//! - An HTTP client for fetching driving directions (optional)
//!
//! ## Features
//!
//! - **`serde`** - Enable serde derives on the public data types
//! - **`http`** - Enable HTTP client for directions fetching
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use route_overlay::{polyline, RouteOverlay};
//!
//! // Decode an encoded polyline (canonical Google example)
//! let points = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
//! assert_eq!(points.len(), 3);
//!
//! // Track the route currently displayed on the map
//! let mut overlay = RouteOverlay::new();
//! let route = overlay.set_route("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap().unwrap();
//! println!("Route: {} points, {:.0}m", route.points().len(), route.total_distance());
//! ```

// Polyline codec
pub mod polyline;
pub use polyline::PolylineError;

// Route overlay management
pub mod overlay;
pub use overlay::RouteOverlay;

// Geographic helpers
pub mod geo_utils;

// HTTP module for directions fetching
#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{DirectionsError, DirectionsFetcher};

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate with latitude and longitude in degrees (WGS84).
///
/// # Example
/// ```
/// use route_overlay::Coordinate;
/// let point = Coordinate::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the coordinate is within valid WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box for a route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from coordinates. Returns `None` for an empty slice.
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self { min_lat, max_lat, min_lng, max_lng })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// A decoded route ready for rendering as a connected line.
///
/// A route is a non-empty, ordered coordinate sequence with precomputed
/// rendering metadata: total distance for display, bounds and center so the
/// map camera can be fitted without a second pass over the points.
///
/// Construction goes through [`Route::from_points`], which rejects empty
/// input; the fields stay private so the non-empty invariant holds for every
/// `Route` value.
///
/// # Example
/// ```
/// use route_overlay::{Coordinate, Route};
///
/// let points = vec![
///     Coordinate::new(51.5074, -0.1278),
///     Coordinate::new(51.5080, -0.1290),
/// ];
///
/// let route = Route::from_points(points).unwrap();
/// assert!(route.total_distance() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<Coordinate>,
    total_distance: f64,
    bounds: Bounds,
    center: Coordinate,
}

impl Route {
    /// Build a route from decoded coordinates.
    ///
    /// Returns `None` if `points` is empty; a route always has at least one
    /// coordinate.
    pub fn from_points(points: Vec<Coordinate>) -> Option<Self> {
        let bounds = Bounds::from_points(&points)?;
        let center = bounds.center();
        let total_distance = geo_utils::route_length(&points);

        Some(Self { points, total_distance, bounds, center })
    }

    /// Ordered coordinates forming the path. Never empty.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Total route distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Bounding box of the route (for camera fitting).
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Center of the bounding box (for camera centering).
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// First coordinate of the route.
    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    /// Last coordinate of the route.
    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(51.5074, -0.1278),
            Coordinate::new(51.5080, -0.1290),
            Coordinate::new(51.5090, -0.1300),
            Coordinate::new(51.5100, -0.1310),
            Coordinate::new(51.5110, -0.1320),
        ]
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(51.5074, -0.1278).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points(&sample_points()).unwrap();
        assert_eq!(bounds.min_lat, 51.5074);
        assert_eq!(bounds.max_lat, 51.5110);
        assert_eq!(bounds.min_lng, -0.1320);
        assert_eq!(bounds.max_lng, -0.1278);

        let center = bounds.center();
        assert!((center.latitude - 51.5092).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_of_empty_slice() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_route_from_points() {
        let route = Route::from_points(sample_points()).unwrap();
        assert_eq!(route.points().len(), 5);
        assert!(route.total_distance() > 0.0);
        assert_eq!(route.start(), Coordinate::new(51.5074, -0.1278));
        assert_eq!(route.end(), Coordinate::new(51.5110, -0.1320));
    }

    #[test]
    fn test_route_requires_points() {
        assert!(Route::from_points(vec![]).is_none());
    }

    #[test]
    fn test_route_accessors_match_inputs() {
        let points = sample_points();
        let route = Route::from_points(points.clone()).unwrap();
        assert_eq!(route.points(), points.as_slice());
        assert_eq!(route.bounds(), Bounds::from_points(&points).unwrap());
        assert_eq!(route.center(), route.bounds().center());
    }

    #[test]
    fn test_single_point_route() {
        let route = Route::from_points(vec![Coordinate::new(51.5074, -0.1278)]).unwrap();
        assert_eq!(route.total_distance(), 0.0);
        assert_eq!(route.start(), route.end());
        assert_eq!(route.center(), route.start());
    }
}
