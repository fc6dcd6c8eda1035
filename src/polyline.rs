//! # Encoded Polyline Codec
//!
//! Decoder and encoder for Google's encoded-polyline format, the compact ASCII
//! representation used by the Directions API (`overview_polyline.points`) and
//! many other mapping services.
//!
//! ## Format
//!
//! Each coordinate is stored as a *delta* from the previous one, scaled by
//! 100,000 and truncated to an integer. Signed deltas are zig-zag encoded so
//! small magnitudes of either sign stay short, then split into 5-bit chunks
//! (least significant first). Every chunk is offset by 63 to land in the
//! printable ASCII range, and bit `0x20` marks that more chunks follow.
//!
//! Reference: [Encoded Polyline Algorithm Format](https://developers.google.com/maps/documentation/utilities/polylinealgorithm)
//!
//! ## Example
//!
//! ```rust
//! use route_overlay::polyline;
//!
//! let points = polyline::decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
//! assert_eq!(points.len(), 3);
//! assert!((points[0].latitude - 38.5).abs() < 1e-9);
//! assert!((points[0].longitude - -120.2).abs() < 1e-9);
//! ```

use crate::Coordinate;
use thiserror::Error;

/// Coordinates are stored scaled by 1e5 and truncated to integers.
const PRECISION: f64 = 1e5;

/// Continuation flag: set on every chunk except the last of a component.
const CONTINUATION_BIT: u64 = 0x20;

/// Low 5 bits of each chunk carry payload.
const CHUNK_MASK: u64 = 0x1f;

/// Every chunk byte is offset by 63 into printable ASCII.
const ASCII_OFFSET: u8 = 63;

/// Error raised when an encoded polyline cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// The chunk sequence for a coordinate component ended without a
    /// terminating byte (continuation bit still set, or a pair missing its
    /// longitude entirely).
    #[error("encoded polyline truncated mid-chunk at byte {position}")]
    MalformedInput {
        /// Byte offset in the input where decoding ran off the end.
        position: usize,
    },
}

/// Decode an encoded polyline into an ordered coordinate sequence.
///
/// Decoding is a pure function of the input: no state is carried between
/// calls, and identical inputs always yield identical output. An empty
/// string decodes to an empty sequence.
///
/// # Errors
///
/// Returns [`PolylineError::MalformedInput`] if the string ends in the middle
/// of a coordinate, either mid-chunk or with a latitude missing its
/// longitude. The previous, complete pairs are not returned; a truncated
/// input never silently yields a shortened route.
///
/// # Example
///
/// ```rust
/// use route_overlay::polyline;
///
/// assert!(polyline::decode("").unwrap().is_empty());
/// assert!(polyline::decode("_").is_err()); // lone continuation chunk
/// ```
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0usize;

    // Running accumulators: each pair is a delta from the previous one.
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += decode_component(bytes, &mut index)?;
        lng += decode_component(bytes, &mut index)?;
        points.push(Coordinate::new(
            lat as f64 / PRECISION,
            lng as f64 / PRECISION,
        ));
    }

    Ok(points)
}

/// Decode a single zig-zag encoded component, advancing `index` past its
/// chunks. Returns the signed delta.
fn decode_component(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = match bytes.get(*index) {
            Some(&b) => b,
            None => return Err(PolylineError::MalformedInput { position: *index }),
        };
        *index += 1;

        let chunk = byte.wrapping_sub(ASCII_OFFSET) as u64;
        // Pathological inputs could push shift past the accumulator width;
        // real coordinates never need more than 7 chunks (35 bits).
        if shift < u64::BITS {
            result |= (chunk & CHUNK_MASK) << shift;
        }
        shift += 5;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    // Zig-zag: lowest bit selects between n and its complement.
    let magnitude = (result >> 1) as i64;
    if result & 1 == 1 {
        Ok(!magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Encode a coordinate sequence as an encoded polyline.
///
/// Coordinates are rounded to 5 decimal places before delta encoding, so
/// `decode(&encode(points))` reproduces `points` exactly whenever the inputs
/// are already on the 1e-5 grid.
///
/// # Example
///
/// ```rust
/// use route_overlay::{polyline, Coordinate};
///
/// let points = vec![
///     Coordinate::new(38.5, -120.2),
///     Coordinate::new(40.7, -120.95),
///     Coordinate::new(43.252, -126.453),
/// ];
///
/// assert_eq!(polyline::encode(&points), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
pub fn encode(points: &[Coordinate]) -> String {
    // Worst case is 12 bytes per coordinate; 6 is typical for routes.
    let mut out = String::with_capacity(points.len() * 6);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = scale(point.latitude);
        let lng = scale(point.longitude);
        encode_component(lat - prev_lat, &mut out);
        encode_component(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

#[inline]
fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

/// Zig-zag encode a signed delta and emit its 5-bit chunks.
fn encode_component(delta: i64, out: &mut String) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;

    loop {
        let mut chunk = value & CHUNK_MASK;
        value >>= 5;
        if value != 0 {
            chunk |= CONTINUATION_BIT;
        }
        out.push((chunk as u8 + ASCII_OFFSET) as char);
        if value == 0 {
            break;
        }
    }
}
