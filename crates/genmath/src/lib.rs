//! Generic 2D measurement and curve evaluation.
//!
//! Purpose
//! - Closed-form geometry over any numeric coordinate type: distances between
//!   points, lines and segments; extreme angles/points of circles and rotated
//!   ellipses; angle/vector betweenness predicates; Bernstein-form Bezier
//!   evaluation over a memoized binomial table.
//!
//! Conventions
//! - Inputs are `scalar::Number` (integers or floats); anything needing sqrt or
//!   trig is produced in a `scalar::Real`. Conversions between the two are
//!   explicit and checked (`scalar::convert`).
//! - Angles are radians, counterclockwise, logically modulo τ.
//! - Everything is a pure function except `bezier::BinomialTable`, an
//!   append-only cache guarded by a lock.

pub mod bezier;
pub mod cfg;
pub mod error;
pub mod intersect;
pub mod measure;
pub mod scalar;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, Result};
pub use scalar::{Number, Real};
pub use types::{Bounds2, CircularArc, Ellipse, EllipticalArc, Segment2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bezier::{bezier, bezier_point, binomial, shared_table, BinomialTable};
    pub use crate::intersect::{
        angle_between, angle_within, approximately_between, approximately_between_eps,
        vector_between, vector_between_cfg, vector_between_vector_vector,
    };
    pub use crate::measure::*;
    pub use crate::scalar::convert;
    pub use crate::{
        Bounds2, CircularArc, Ellipse, EllipticalArc, GeomCfg, GeomError, Number, Real, Segment2,
    };
    pub use nalgebra::{Point2, Vector2};
}
