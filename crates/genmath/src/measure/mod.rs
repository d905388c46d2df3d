//! Measurement: distances and ellipse/circle extremes.
//!
//! Purpose
//! - Closed-form distances between points, infinite lines and segments, with
//!   degenerate inputs (zero-length direction or segment) falling back to the
//!   point-to-point distance instead of dividing by zero.
//! - Extreme angles/points of circles and rotated ellipses (and their arcs)
//!   for axis-aligned bounding boxes.
//!
//! Code cross-refs: `intersect::angle_within` (arc filtering), `types::{Segment2,Ellipse}`.

mod distance;
mod ellipse;

pub use distance::{
    constrained_distance_line_segment_point, distance, distance_line_point,
    distance_line_segment_point, distance_sq, perpendicular_distance,
};
pub use ellipse::{
    aspect_ratio, circle_extreme_angles, circle_extreme_points, circular_arc_extreme_angles,
    eccentricity, ellipse_extreme_angles, ellipse_extreme_points,
    ellipse_horizontal_extreme_angles, ellipse_point, ellipse_vertical_extreme_angles,
    elliptical_arc_extreme_angles, elliptical_arc_vertical_extreme_angles, focus_radius,
    orthogonal_ellipse_extreme_points,
};
