//! HTTP client for a Google-style Directions API.
//!
//! This module is the network boundary of the crate: it fetches driving
//! directions between two coordinates, extracts the route's overview
//! polyline from the JSON response, and decodes it into a [`Route`] ready to
//! hand to [`crate::RouteOverlay::set_route`] (or to render directly).
//!
//! Response parsing is a separate pure function so it is testable without a
//! network; the fetcher only adds transport, retry, and backoff around it.
//! Malformed responses surface as typed [`DirectionsError`] values instead of
//! being logged and swallowed.

use crate::polyline::{self, PolylineError};
use crate::{Coordinate, Route};
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default directions endpoint (Google Directions API, JSON output).
pub const DIRECTIONS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/directions/json";

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error raised while fetching or interpreting a directions response.
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status after retries.
    #[error("directions API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON shape.
    #[error("failed to parse directions response: {0}")]
    Json(#[from] serde_json::Error),

    /// Response parsed but contained no usable route.
    #[error("directions response contained no route")]
    NoRoute,

    /// The overview polyline in the response could not be decoded.
    #[error("route polyline could not be decoded: {0}")]
    Polyline(#[from] PolylineError),
}

// Directions API response shape, reduced to the fields we consume.

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

/// Parse a raw directions response body into a [`Route`].
///
/// Takes the first returned route (the API orders them best-first), decodes
/// its `overview_polyline.points`, and builds the route. Pure function, no
/// I/O.
///
/// # Errors
///
/// - [`DirectionsError::Json`] if the body is not the expected JSON shape
/// - [`DirectionsError::NoRoute`] if `routes` is empty or the polyline
///   decodes to no coordinates
/// - [`DirectionsError::Polyline`] if the overview polyline is malformed
pub fn parse_directions_response(body: &[u8]) -> Result<Route, DirectionsError> {
    let response: DirectionsResponse = serde_json::from_slice(body)?;

    let api_route = response
        .routes
        .into_iter()
        .next()
        .ok_or(DirectionsError::NoRoute)?;

    let points = polyline::decode(&api_route.overview_polyline.points)?;
    Route::from_points(points).ok_or(DirectionsError::NoRoute)
}

/// Directions client with connection pooling and retry.
///
/// # Example
///
/// ```rust,no_run
/// use route_overlay::{Coordinate, DirectionsFetcher};
///
/// # async fn run() -> Result<(), route_overlay::DirectionsError> {
/// let fetcher = DirectionsFetcher::new("YOUR_API_KEY")?;
/// let route = fetcher
///     .fetch_route(
///         Coordinate::new(51.5074, -0.1278),
///         Coordinate::new(51.5290, -0.1255),
///     )
///     .await?;
/// println!("Route: {} points, {:.0}m", route.points().len(), route.total_distance());
/// # Ok(())
/// # }
/// ```
pub struct DirectionsFetcher {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl DirectionsFetcher {
    /// Create a fetcher talking to the default directions endpoint.
    pub fn new(api_key: &str) -> Result<Self, DirectionsError> {
        Self::with_endpoint(api_key, DIRECTIONS_ENDPOINT)
    }

    /// Create a fetcher with a custom endpoint (proxies, test servers).
    pub fn with_endpoint(api_key: &str, endpoint: &str) -> Result<Self, DirectionsError> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .tcp_keepalive(Duration::from_secs(30))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    /// Fetch a driving route from `origin` to `destination`.
    ///
    /// Retries transient transport errors and HTTP 429 with exponential
    /// backoff, then parses and decodes the response.
    pub async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, DirectionsError> {
        let origin_param = format!("{},{}", origin.latitude, origin.longitude);
        let destination_param = format!("{},{}", destination.latitude, destination.longitude);

        let mut retries = 0;
        let start = Instant::now();

        loop {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[
                    ("origin", origin_param.as_str()),
                    ("destination", destination_param.as_str()),
                    ("key", self.api_key.as_str()),
                ])
                .send()
                .await;

            match response {
                Ok(resp) => {
                    let status = resp.status();

                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        retries += 1;
                        if retries > MAX_RETRIES {
                            return Err(DirectionsError::Status(status));
                        }
                        let wait = backoff(retries);
                        warn!(
                            "[Directions] 429 Too Many Requests, retry {} after {:?}",
                            retries, wait
                        );
                        tokio::time::sleep(wait).await;
                        continue;
                    }

                    if !status.is_success() {
                        return Err(DirectionsError::Status(status));
                    }

                    let bytes = resp.bytes().await?;
                    debug!(
                        "[Directions] {} -> {}: {} bytes in {:?}",
                        origin_param,
                        destination_param,
                        bytes.len(),
                        start.elapsed()
                    );

                    let route = parse_directions_response(&bytes)?;
                    info!(
                        "[Directions] Route found: {} points, {:.0}m in {:?}",
                        route.points().len(),
                        route.total_distance(),
                        start.elapsed()
                    );
                    return Ok(route);
                }
                Err(e) => {
                    retries += 1;
                    if retries > MAX_RETRIES {
                        return Err(DirectionsError::Request(e));
                    }
                    let wait = backoff(retries);
                    warn!(
                        "[Directions] Request error: {}, retry {} after {:?}",
                        e, retries, wait
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}

/// Exponential backoff: 400ms, 800ms, 1.6s.
fn backoff(retries: u32) -> Duration {
    Duration::from_millis(200 * (1 << retries.min(3)))
}
