//! Extreme angles/points of circles and (rotated) ellipses, plus shape formulas.
//!
//! Parametric ellipse with centre `(x, y)`, radii `rx, ry`, rotation `φ`:
//! `P(θ) = (x + rx cosθ cosφ − ry sinθ sinφ, y + rx cosθ sinφ + ry sinθ cosφ)`.
//! Extreme points are where the tangent is vertical (min/max x, "horizontal
//! extremes") or horizontal (min/max y, "vertical extremes").
//!
//! Point arrays are ordered right, left, top, bottom.

use nalgebra::Point2;

use crate::intersect::angle_within;
use crate::scalar::{tau, Real};
use crate::types::{Bounds2, CircularArc, Ellipse, EllipticalArc};

/// Parametric angles of a circle's extreme points: `[0, π/2, π, 3π/2]`.
#[inline]
pub fn circle_extreme_angles<R: Real>() -> [R; 4] {
    [R::zero(), R::FRAC_PI_2(), R::PI(), R::PI() + R::FRAC_PI_2()]
}

/// Circle extreme angles that lie on the arc `start ..= start + sweep`.
pub fn circular_arc_extreme_angles<R: Real>(start_angle: R, sweep_angle: R) -> Vec<R> {
    circle_extreme_angles()
        .into_iter()
        .filter(|&a| angle_within(a, start_angle, sweep_angle))
        .collect()
}

/// Rotated radius projections `(a, b, c, d) = (rx cosφ, ry sinφ, rx sinφ, ry cosφ)`.
#[inline]
fn projections<R: Real>(rx: R, ry: R, cos: R, sin: R) -> (R, R, R, R) {
    (rx * cos, ry * sin, rx * sin, ry * cos)
}

/// Angle of the rightmost point; the leftmost is this plus π.
#[inline]
fn horizontal_extreme<R: Real>(rx: R, ry: R, cos: R, sin: R) -> R {
    let (a, b, _, _) = projections(rx, ry, cos, sin);
    (-b).atan2(a)
}

/// Angle of the topmost point; the bottommost is this plus π.
#[inline]
fn vertical_extreme<R: Real>(rx: R, ry: R, cos: R, sin: R) -> R {
    let (_, _, c, d) = projections(rx, ry, cos, sin);
    d.atan2(c)
}

/// Parametric angles of the four extreme points of a rotated ellipse:
/// `[right, left, top, bottom]`.
pub fn ellipse_extreme_angles<R: Real>(rx: R, ry: R, rotation: R) -> [R; 4] {
    let (sin, cos) = rotation.sin_cos();
    let h = horizontal_extreme(rx, ry, cos, sin);
    let v = vertical_extreme(rx, ry, cos, sin);
    [h, h + R::PI(), v, v + R::PI()]
}

/// `[right, left]` parametric angles (min/max x).
pub fn ellipse_horizontal_extreme_angles<R: Real>(rx: R, ry: R, rotation: R) -> [R; 2] {
    let (sin, cos) = rotation.sin_cos();
    let h = horizontal_extreme(rx, ry, cos, sin);
    [h, h + R::PI()]
}

/// `[top, bottom]` parametric angles (min/max y).
pub fn ellipse_vertical_extreme_angles<R: Real>(rx: R, ry: R, rotation: R) -> [R; 2] {
    let (sin, cos) = rotation.sin_cos();
    let v = vertical_extreme(rx, ry, cos, sin);
    [v, v + R::PI()]
}

/// Extreme angles on an elliptical arc. The window is offset by the rotation:
/// an angle is kept when it lies within `start + rotation ..= start + rotation + sweep`.
pub fn elliptical_arc_extreme_angles<R: Real>(
    rx: R,
    ry: R,
    rotation: R,
    start_angle: R,
    sweep_angle: R,
) -> Vec<R> {
    let start = start_angle + rotation;
    ellipse_extreme_angles(rx, ry, rotation)
        .into_iter()
        .filter(|&a| angle_within(a, start, sweep_angle))
        .collect()
}

/// Vertical (min/max y) extreme angles on an elliptical arc.
pub fn elliptical_arc_vertical_extreme_angles<R: Real>(
    rx: R,
    ry: R,
    rotation: R,
    start_angle: R,
    sweep_angle: R,
) -> Vec<R> {
    let start = start_angle + rotation;
    ellipse_vertical_extreme_angles(rx, ry, rotation)
        .into_iter()
        .filter(|&a| angle_within(a, start, sweep_angle))
        .collect()
}

/// Point on the ellipse at parametric angle `theta`.
#[inline]
pub fn ellipse_point<R: Real>(x: R, y: R, rx: R, ry: R, cos: R, sin: R, theta: R) -> Point2<R> {
    let (st, ct) = theta.sin_cos();
    Point2::new(
        x + rx * ct * cos - ry * st * sin,
        y + rx * ct * sin + ry * st * cos,
    )
}

/// `[(x+r, y), (x−r, y), (x, y+r), (x, y−r)]`.
#[inline]
pub fn circle_extreme_points<R: Real>(x: R, y: R, r: R) -> [Point2<R>; 4] {
    [
        Point2::new(x + r, y),
        Point2::new(x - r, y),
        Point2::new(x, y + r),
        Point2::new(x, y - r),
    ]
}

/// Extreme points of an axis-aligned ellipse.
#[inline]
pub fn orthogonal_ellipse_extreme_points<R: Real>(x: R, y: R, rx: R, ry: R) -> [Point2<R>; 4] {
    [
        Point2::new(x + rx, y),
        Point2::new(x - rx, y),
        Point2::new(x, y + ry),
        Point2::new(x, y - ry),
    ]
}

/// General rotated-ellipse formula, without the circle/axis-aligned shortcuts.
pub(crate) fn rotated_ellipse_extreme_points<R: Real>(
    x: R,
    y: R,
    rx: R,
    ry: R,
    cos: R,
    sin: R,
) -> [Point2<R>; 4] {
    let h = horizontal_extreme(rx, ry, cos, sin);
    let v = vertical_extreme(rx, ry, cos, sin);
    [h, h + R::PI(), v, v + R::PI()].map(|t| ellipse_point(x, y, rx, ry, cos, sin, t))
}

/// Extreme points of an ellipse given the cosine and sine of its rotation.
///
/// Circles (`rx == ry`) and unrotated ellipses (`cos == 1, sin == 0`) take
/// exact closed forms; everything else uses the rotated formula.
pub fn ellipse_extreme_points<R: Real>(x: R, y: R, rx: R, ry: R, cos: R, sin: R) -> [Point2<R>; 4] {
    if rx == ry {
        return circle_extreme_points(x, y, rx);
    }
    if cos == R::one() && sin == R::zero() {
        return orthogonal_ellipse_extreme_points(x, y, rx, ry);
    }
    rotated_ellipse_extreme_points(x, y, rx, ry, cos, sin)
}

#[inline]
fn major_minor<R: Real>(rx: R, ry: R) -> (R, R) {
    let (rx, ry) = (rx.abs(), ry.abs());
    if rx >= ry {
        (rx, ry)
    } else {
        (ry, rx)
    }
}

/// `sqrt(1 − (minor/major)²)`; 0 for circles and the zero ellipse.
pub fn eccentricity<R: Real>(rx: R, ry: R) -> R {
    let (major, minor) = major_minor(rx, ry);
    if major == R::zero() {
        return R::zero();
    }
    let ratio = minor / major;
    (R::one() - ratio * ratio).sqrt()
}

/// `ry / rx`; `None` when `rx == 0`.
pub fn aspect_ratio<R: Real>(rx: R, ry: R) -> Option<R> {
    if rx == R::zero() {
        None
    } else {
        Some(ry / rx)
    }
}

/// Distance from the centre to either focus: `sqrt(major² − minor²)`.
pub fn focus_radius<R: Real>(rx: R, ry: R) -> R {
    let (major, minor) = major_minor(rx, ry);
    (major * major - minor * minor).sqrt()
}

/// Whether `theta` lies on the arc `start ..= start + sweep` for any
/// representative of `theta` modulo τ, in either sweep direction.
fn on_arc<R: Real>(theta: R, start: R, sweep: R) -> bool {
    let tau = tau::<R>();
    if sweep.abs() >= tau {
        return true;
    }
    let (lo, len) = if sweep < R::zero() {
        (start + sweep, -sweep)
    } else {
        (start, sweep)
    };
    let mut offset = (theta - lo) % tau;
    if offset < R::zero() {
        offset += tau;
    }
    offset <= len
}

impl<R: Real> Ellipse<R> {
    #[inline]
    pub fn point_at(&self, theta: R) -> Point2<R> {
        let (sin, cos) = self.rotation.sin_cos();
        ellipse_point(self.center.x, self.center.y, self.rx, self.ry, cos, sin, theta)
    }

    pub fn extreme_angles(&self) -> [R; 4] {
        ellipse_extreme_angles(self.rx, self.ry, self.rotation)
    }

    pub fn extreme_points(&self) -> [Point2<R>; 4] {
        let (sin, cos) = self.rotation.sin_cos();
        ellipse_extreme_points(self.center.x, self.center.y, self.rx, self.ry, cos, sin)
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Bounds2<R> {
        let [right, left, top, bottom] = self.extreme_points();
        Bounds2 {
            min: Point2::new(left.x, bottom.y),
            max: Point2::new(right.x, top.y),
        }
    }

    pub fn eccentricity(&self) -> R {
        eccentricity(self.rx, self.ry)
    }

    pub fn aspect_ratio(&self) -> Option<R> {
        aspect_ratio(self.rx, self.ry)
    }

    pub fn focus_radius(&self) -> R {
        focus_radius(self.rx, self.ry)
    }
}

impl<R: Real> CircularArc<R> {
    pub fn extreme_angles(&self) -> Vec<R> {
        circular_arc_extreme_angles(self.start_angle, self.sweep_angle)
    }

    #[inline]
    pub fn point_at(&self, theta: R) -> Point2<R> {
        let (sin, cos) = theta.sin_cos();
        Point2::new(self.center.x + self.radius * cos, self.center.y + self.radius * sin)
    }

    /// Bounding box of the arc: both end points plus every extreme point on it.
    pub fn bounds(&self) -> Bounds2<R> {
        let first = self.point_at(self.start_angle);
        let mut bounds = Bounds2 {
            min: first,
            max: first,
        };
        bounds.include(self.point_at(self.start_angle + self.sweep_angle));
        for a in circle_extreme_angles() {
            if on_arc(a, self.start_angle, self.sweep_angle) {
                bounds.include(self.point_at(a));
            }
        }
        bounds
    }
}

impl<R: Real> EllipticalArc<R> {
    pub fn extreme_angles(&self) -> Vec<R> {
        let e = &self.ellipse;
        elliptical_arc_extreme_angles(e.rx, e.ry, e.rotation, self.start_angle, self.sweep_angle)
    }

    pub fn vertical_extreme_angles(&self) -> Vec<R> {
        let e = &self.ellipse;
        elliptical_arc_vertical_extreme_angles(
            e.rx,
            e.ry,
            e.rotation,
            self.start_angle,
            self.sweep_angle,
        )
    }

    /// Bounding box: end points at `start + rotation` and `start + rotation + sweep`
    /// plus every extreme point on the arc, whichever way the arc is swept.
    pub fn bounds(&self) -> Bounds2<R> {
        let start = self.start_angle + self.ellipse.rotation;
        let first = self.ellipse.point_at(start);
        let mut bounds = Bounds2 {
            min: first,
            max: first,
        };
        bounds.include(self.ellipse.point_at(start + self.sweep_angle));
        for a in self.ellipse.extreme_angles() {
            if on_arc(a, start, self.sweep_angle) {
                bounds.include(self.ellipse.point_at(a));
            }
        }
        bounds
    }
}
