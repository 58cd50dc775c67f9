//! Shadowcast walkthrough: projects one box through a sequence of jobs.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=shadowcast=trace cargo run --example walkthrough
//! ```
//!
//! Each step feeds the transformed solid of the previous step forward, so
//! the translation and scale accumulate.

use shadowcast::math::{Point3, Vector3};
use shadowcast::operations::MakeBox;
use shadowcast::{Project, Projection, ProjectionKind, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for shadowcast.
    // Override with RUST_LOG env var (e.g. RUST_LOG=shadowcast=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default())
        .add_directive("shadowcast=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let overhead = Point3::new(0.0, 0.0, 8.0);
    let steps = [
        Project::new(overhead, ProjectionKind::Orthographic),
        Project::new(overhead, ProjectionKind::Oblique),
        Project::new(overhead, ProjectionKind::Perspective),
        Project::new(overhead, ProjectionKind::Perspective)
            .with_translation(Vector3::new(1.0, 1.0, 1.0)),
        Project::new(Point3::new(0.0, 4.0, 8.0), ProjectionKind::Perspective).with_scale(2.0),
    ];

    let mut solid = MakeBox::new(Point3::new(1.0, 1.0, 1.0), 2.0).execute();
    for step in &steps {
        let projection = step.execute(&solid)?;
        report(&projection);
        solid = projection.solid;
    }
    Ok(())
}

fn report(projection: &Projection) {
    tracing::info!(
        kind = %projection.kind,
        light = ?projection.light_marker(),
        centroid = ?projection.solid.centroid(),
        "projection"
    );
    for (i, (v, shadow)) in projection
        .solid
        .vertices()
        .iter()
        .zip(projection.projected.points())
        .enumerate()
    {
        tracing::info!(
            "  {i}: ({:6.3}, {:6.3}, {:6.3}) -> ({:6.3}, {:6.3})",
            v.x,
            v.y,
            v.z,
            shadow.x,
            shadow.y
        );
    }
}
