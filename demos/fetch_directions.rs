//! Fetch driving directions and display the decoded route.
//!
//! Run with: cargo run --example fetch_directions --features http -- <API_KEY>

use route_overlay::{Coordinate, DirectionsFetcher, RouteOverlay};

#[tokio::main]
async fn main() {
    env_logger_init();

    let api_key = match std::env::args().nth(1) {
        Some(key) => key,
        None => {
            eprintln!("Usage: fetch_directions <API_KEY>");
            std::process::exit(1);
        }
    };

    let origin = Coordinate::new(51.5074, -0.1278); // Trafalgar Square
    let destination = Coordinate::new(51.5290, -0.1255); // Camden

    let fetcher = DirectionsFetcher::new(&api_key).expect("failed to build HTTP client");

    println!(
        "Fetching directions ({:.4}, {:.4}) -> ({:.4}, {:.4})...",
        origin.latitude, origin.longitude, destination.latitude, destination.longitude
    );

    match fetcher.fetch_route(origin, destination).await {
        Ok(route) => {
            let mut overlay = RouteOverlay::new();
            println!(
                "Got route: {} points, {:.1} km",
                route.points().len(),
                route.total_distance() / 1000.0
            );

            // Hand the route to the overlay via its wire form, as the map
            // screen does with the raw API response
            let encoded = route_overlay::polyline::encode(route.points());
            let current = overlay.set_route(&encoded).unwrap().unwrap();
            println!(
                "Overlay now displaying route centered at ({:.4}, {:.4})",
                current.center().latitude, current.center().longitude
            );
        }
        Err(e) => {
            eprintln!("Directions fetch failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Minimal stderr logger so the crate's log output is visible in the demo.
fn env_logger_init() {
    struct StderrLogger;
    impl log::Log for StderrLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }
        fn log(&self, record: &log::Record) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
        fn flush(&self) {}
    }
    static LOGGER: StderrLogger = StderrLogger;
    let _ = log::set_logger(&LOGGER).map(|_| log::set_max_level(log::LevelFilter::Debug));
}
