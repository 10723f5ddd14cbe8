//! fieldgeo probe: runs a few queries against a sample capture zone and logs
//! the results.
//!
//! Usage:
//! ```text
//! cargo run --example probe                 # default (zone)
//! cargo run --example probe -- host         # same queries through host dispatch
//! RUST_LOG=fieldgeo=trace cargo run --example probe -- host
//! ```

use fieldgeo::{
    distance_to_polygon, horizontal_distance, is_close, is_point_in_polygon,
    position_from_position_rotation, HostFunction, HostValue, Point2, Point3, Vector3,
};

fn capture_zone() -> Vec<Point2> {
    vec![
        Point2::new(-50.0, -50.0),
        Point2::new(50.0, -50.0),
        Point2::new(50.0, 20.0),
        Point2::new(0.0, 60.0),
        Point2::new(-50.0, 20.0),
    ]
}

fn run_zone() {
    let zone = capture_zone();
    let flag = Point3::new(0.0, 12.0, 0.0);
    let squad = Point3::new(-80.0, 14.5, 30.0);

    for step in 0..6 {
        let heading = Vector3::new(90.0, 0.0, 0.0);
        let pos = position_from_position_rotation(&squad, &heading, f64::from(step) * 20.0);
        tracing::info!(
            step,
            x = pos.x,
            z = pos.z,
            inside = is_point_in_polygon(&pos, &zone),
            edge_distance = distance_to_polygon(&pos, &zone),
            flag_distance = horizontal_distance(&pos, &flag),
            near_flag = is_close(&pos, &flag, 25.0),
            "squad position"
        );
    }
}

fn run_host() {
    let zone = HostValue::List(
        capture_zone()
            .iter()
            .map(|v| HostValue::Tuple(vec![v.x.into(), v.y.into()]))
            .collect(),
    );
    let pos = HostValue::from(Point3::new(10.0, 0.0, 10.0));

    for func in [
        HostFunction::IsPointInPolygon,
        HostFunction::DistanceToPolygon,
        HostFunction::SignedDistanceToPolygon,
    ] {
        match func.call(&[pos.clone(), zone.clone()]) {
            Ok(result) => tracing::info!(function = %func, ?result, "host call"),
            Err(err) => tracing::error!(function = %func, %err, "host call failed"),
        }
    }

    // Malformed input is rejected at the boundary.
    if let Err(err) = fieldgeo::host::call("calcDistance", &[pos, HostValue::Float(1.0)]) {
        tracing::warn!(%err, "rejected");
    }
}

fn main() {
    // Default: WARN for everything, INFO for fieldgeo and this demo.
    // Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("probe=info".parse().unwrap_or_default())
        .add_directive("fieldgeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let scenario = std::env::args().nth(1).unwrap_or_else(|| "zone".into());
    match scenario.as_str() {
        "zone" => run_zone(),
        "host" => run_host(),
        other => tracing::error!(scenario = other, "unknown scenario (expected zone or host)"),
    }
}
