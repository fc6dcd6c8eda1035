//! Basic example of decoding a polyline and managing the route overlay.
//!
//! Run with: cargo run --example decode_route

use route_overlay::{polyline, RouteOverlay};

fn main() {
    // Canonical encoded polyline from the format documentation
    let encoded = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    println!("Polyline Decoding Example\n");
    println!("Encoded: {}", encoded);

    let points = polyline::decode(encoded).unwrap();
    println!("Decoded {} points:", points.len());
    for p in &points {
        println!("   ({:.5}, {:.5})", p.latitude, p.longitude);
    }

    // Round-trip back to the wire format
    let reencoded = polyline::encode(&points);
    println!("\nRe-encoded: {}", reencoded);
    assert_eq!(reencoded, encoded);

    // Manage the displayed route the way a map screen would
    let mut overlay = RouteOverlay::new();
    let route = overlay.set_route(encoded).unwrap().unwrap();
    println!(
        "\nOverlay route: {} points, {:.1} km, centered at ({:.4}, {:.4})",
        route.points().len(),
        route.total_distance() / 1000.0,
        route.center().latitude,
        route.center().longitude
    );

    // A malformed polyline leaves the displayed route alone
    match overlay.set_route("_") {
        Ok(_) => unreachable!(),
        Err(e) => println!("Malformed input rejected: {}", e),
    }
    println!(
        "Still displaying {} points",
        overlay.current_route().unwrap().points().len()
    );
}
