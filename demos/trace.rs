//! Roadstrip trace demo: renders a closed track into a recording surface and
//! runs a few on-road queries.
//!
//! Usage:
//! ```text
//! cargo run --example trace                        # production ribbon
//! cargo run --example trace -- debug               # sample/tangent view
//! RUST_LOG=roadstrip=trace cargo run --example trace
//! ```

use roadstrip::draw::{Color, DrawList};
use roadstrip::geometry::CatmullRom;
use roadstrip::math::Point2;
use roadstrip::render::Frame;
use roadstrip::view::{Camera, Minimap};
use roadstrip::{RenderQuality, Road, RoadConfig};

fn main() -> roadstrip::Result<()> {
    // Default: WARN for everything, INFO for roadstrip.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roadstrip=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trace=info".parse().unwrap_or_default())
        .add_directive("roadstrip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let debug = std::env::args().nth(1).is_some_and(|a| a == "debug");

    let track = CatmullRom::closed(&[
        Point2::new(0.0, 0.0),
        Point2::new(25.0, -5.0),
        Point2::new(40.0, 10.0),
        Point2::new(30.0, 30.0),
        Point2::new(5.0, 25.0),
        Point2::new(-10.0, 12.0),
    ])?;
    let config = RoadConfig {
        draw_road: !debug,
        quality: RenderQuality::HIGH,
        ..RoadConfig::default()
    };
    let road = Road::new(track, config)?;

    let camera = Camera::new(Point2::new(15.0, 12.0), 16.0, 1280, 720);
    let minimap = Minimap::new(1280, 720);
    let mut surface = DrawList::new();
    let player = Point2::new(0.3, 0.2);

    let mut frame = Frame::new(&camera, &minimap, &mut surface);
    let summary = road.draw(&mut frame)?;
    road.draw_minimap_marker(&mut frame, &player, Color::RED);

    tracing::info!(
        samples = summary.samples,
        culled = summary.culled,
        skipped = summary.skipped,
        lines = summary.lines,
        points = summary.points,
        commands = surface.commands().len(),
        "frame rendered"
    );

    for probe in [player, Point2::new(15.0, 12.0), Point2::new(40.5, 10.0)] {
        match road.nearest_parameter(&probe)? {
            Some(t) => tracing::info!(x = probe.x, y = probe.y, t, "on road"),
            None => tracing::info!(x = probe.x, y = probe.y, "off road"),
        }
    }

    Ok(())
}
