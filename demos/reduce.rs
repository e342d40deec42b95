//! Reduction demo: synthesizes a dense noisy curve and reduces it at a
//! sweep of tolerances.
//!
//! Usage:
//! ```text
//! cargo run --example reduce                    # per-tolerance summary
//! RUST_LOG=chartfilter=debug cargo run --example reduce
//! ```

use chartfilter::filter;
use chartfilter::math::Point2;
use chartfilter::Result;

fn main() -> Result<()> {
    // Default: INFO for everything, DEBUG for chartfilter.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .add_directive("chartfilter=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Dense sine wave with a high-frequency wobble standing in for
    // sampling noise, roughly the shape of a real chart series.
    let points: Vec<Point2> = (0..10_000)
        .map(|i| {
            let x = f64::from(i) * 0.01;
            let y = x.sin() + 0.05 * (13.0 * x).sin();
            Point2::new(x, y)
        })
        .collect();

    for tolerance in [0.0, 0.01, 0.05, 0.1, 0.5] {
        let reduced = filter::reduce(&points, tolerance)?;
        tracing::info!(
            tolerance,
            input = points.len(),
            kept = reduced.len(),
            "tolerance sweep"
        );
    }

    Ok(())
}
