//! A short walk through the shape2d value types.
//!
//! Usage:
//! ```text
//! cargo run --example tour
//! RUST_LOG=tour=debug cargo run --example tour
//! ```

use std::f64::consts::FRAC_PI_4;

use shape2d::{Matrix, Result, Vector};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the tour and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tour=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tour=info".parse().unwrap_or_default())
        .add_directive("shape2d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tour_vectors()?;
    tour_matrices()?;
    Ok(())
}

fn tour_vectors() -> Result<()> {
    let a = Vector::new(10.0, 20.0);
    let b = Vector::from_sequence([1, 2])?;
    info!(%a, %b, "constructed vectors");

    info!(sum = %(a + b), difference = %(a - b), "addition and subtraction");
    info!(doubled = %(a * 2.0), scaled = %(-3.0 * a), halved = %(a / 2.0), "scalar arithmetic");
    info!(floored = %(a.floor_div(3.0)), "floor division");
    info!(length = a.length(), angle = a.angle(), unit = ?(a.unit()), "derived properties");

    let p = Vector::polar(2.0, FRAC_PI_4);
    debug!(?p, x = p[0], y = p[1], "polar construction");

    if let Err(err) = Vector::from_sequence([1.0, 2.0, 3.0]) {
        warn!(%err, "rejected three-element sequence");
    }
    if let Err(err) = a.get(2) {
        warn!(%err, "rejected out-of-range index");
    }
    Ok(())
}

fn tour_matrices() -> Result<()> {
    let m = Matrix::scale(2.0) + Matrix::translate(3.0, 4.0);
    info!(%m, "scale plus translation");

    let r = Matrix::rotation(FRAC_PI_4);
    let last = r.get(-1)?;
    info!(%r, last, "rotation by 45 degrees");

    let components: Vec<f64> = (m - r).into_iter().collect();
    debug!(?components, "component-wise difference");
    Ok(())
}
