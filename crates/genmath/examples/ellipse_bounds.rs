//! Print extreme points and bounding boxes for a few rotated ellipses and arcs.
//!
//! Usage:
//!   cargo run -p genmath --example ellipse_bounds

use genmath::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn main() -> Result<(), GeomError> {
    for rotation in [0.0, FRAC_PI_4, FRAC_PI_2] {
        let e = Ellipse::new(Point2::new(0.0, 0.0), 3.0, 1.0, rotation)?;
        let b = e.bounds();
        println!(
            "rotation={rotation:.3} e={:.3} bounds=({:.3},{:.3})..({:.3},{:.3})",
            e.eccentricity(),
            b.min.x,
            b.min.y,
            b.max.x,
            b.max.y
        );
        for (name, p) in ["right", "left", "top", "bottom"]
            .iter()
            .zip(e.extreme_points())
        {
            println!("  {name:>6}: ({:.3}, {:.3})", p.x, p.y);
        }
        let arc = EllipticalArc::new(e, 0.0, PI);
        let ab = arc.bounds();
        println!(
            "  upper-half arc angles={:?} bounds=({:.3},{:.3})..({:.3},{:.3})",
            arc.extreme_angles(),
            ab.min.x,
            ab.min.y,
            ab.max.x,
            ab.max.y
        );
    }
    Ok(())
}
