//! # Route Overlay Manager
//!
//! Tracks the route currently displayed on the map and replaces it when a new
//! route search completes.
//!
//! The manager is a synchronous transform over data handed to it by the
//! network boundary: it decodes the encoded polyline from a directions
//! response and swaps it in as the current route. It holds no concurrency of
//! its own: call it from the thread that owns the map-rendering context, so
//! the renderer never observes an in-between state with both (or neither)
//! route visible.
//!
//! ## Example
//!
//! ```rust
//! use route_overlay::RouteOverlay;
//!
//! let mut overlay = RouteOverlay::new();
//!
//! let route = overlay.set_route("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
//! assert_eq!(route.unwrap().points().len(), 3);
//!
//! // A malformed polyline leaves the displayed route untouched
//! assert!(overlay.set_route("_").is_err());
//! assert!(overlay.current_route().is_some());
//! ```

use crate::polyline::{self, PolylineError};
use crate::Route;
use log::debug;

/// Owner of the currently displayed route.
///
/// Exactly one route is current at a time. Replacing it is atomic from the
/// caller's point of view: `set_route` either installs the fully decoded new
/// route or, on error, changes nothing.
#[derive(Debug, Default)]
pub struct RouteOverlay {
    current: Option<Route>,
}

impl RouteOverlay {
    /// Create an overlay with no route displayed.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Decode `encoded` and make it the current route, replacing any
    /// previously held route.
    ///
    /// Returns a reference to the new current route, or `Ok(None)` if the
    /// polyline decoded to no coordinates (an empty route search result),
    /// which clears the overlay.
    ///
    /// # Errors
    ///
    /// Propagates [`PolylineError::MalformedInput`] from the decoder. On
    /// error the previously displayed route (if any) stays current, with no
    /// partial update.
    pub fn set_route(&mut self, encoded: &str) -> Result<Option<&Route>, PolylineError> {
        // Decode before touching `current` so a failure leaves it intact.
        let points = polyline::decode(encoded)?;

        match Route::from_points(points) {
            Some(route) => {
                debug!(
                    "[RouteOverlay] Replacing route: {} points, {:.0}m (had route: {})",
                    route.points().len(),
                    route.total_distance(),
                    self.current.is_some()
                );
                self.current = Some(route);
                Ok(self.current.as_ref())
            }
            None => {
                debug!("[RouteOverlay] Empty polyline, clearing displayed route");
                self.current = None;
                Ok(None)
            }
        }
    }

    /// The currently displayed route, if any.
    pub fn current_route(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    /// Remove the current route, returning it so the rendering collaborator
    /// can tear down its visual representation.
    pub fn clear(&mut self) -> Option<Route> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyline::encode;
    use crate::Coordinate;

    const REFERENCE_ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[test]
    fn test_set_route_installs_decoded_route() {
        let mut overlay = RouteOverlay::new();
        assert!(overlay.current_route().is_none());

        let route = overlay.set_route(REFERENCE_ENCODED).unwrap().unwrap();
        assert_eq!(route.points().len(), 3);
        assert_eq!(overlay.current_route().unwrap().points().len(), 3);
    }

    #[test]
    fn test_new_route_replaces_previous() {
        let mut overlay = RouteOverlay::new();
        overlay.set_route(REFERENCE_ENCODED).unwrap();

        let short = encode(&[
            Coordinate::new(51.50740, -0.12780),
            Coordinate::new(51.50800, -0.12900),
        ]);
        let route = overlay.set_route(&short).unwrap().unwrap();
        assert_eq!(route.points().len(), 2);

        // Only the new route remains.
        assert_eq!(overlay.current_route().unwrap().points().len(), 2);
    }

    #[test]
    fn test_malformed_input_preserves_current_route() {
        let mut overlay = RouteOverlay::new();
        overlay.set_route(REFERENCE_ENCODED).unwrap();
        let before = overlay.current_route().unwrap().clone();

        let err = overlay.set_route("_").unwrap_err();
        assert!(matches!(err, PolylineError::MalformedInput { .. }));

        // No partial update: the old route is still displayed.
        assert_eq!(overlay.current_route().unwrap(), &before);
    }

    #[test]
    fn test_malformed_input_with_no_route_leaves_overlay_empty() {
        let mut overlay = RouteOverlay::new();
        assert!(overlay.set_route("_").is_err());
        assert!(overlay.current_route().is_none());
    }

    #[test]
    fn test_empty_polyline_clears_route() {
        let mut overlay = RouteOverlay::new();
        overlay.set_route(REFERENCE_ENCODED).unwrap();

        assert!(overlay.set_route("").unwrap().is_none());
        assert!(overlay.current_route().is_none());
    }

    #[test]
    fn test_clear_hands_back_route_for_teardown() {
        let mut overlay = RouteOverlay::new();
        overlay.set_route(REFERENCE_ENCODED).unwrap();

        let removed = overlay.clear().unwrap();
        assert_eq!(removed.points().len(), 3);
        assert!(overlay.current_route().is_none());
        assert!(overlay.clear().is_none());
    }
}
