//! Plain value types consumed by the measurement routines.
//!
//! - `Segment2`: line segment between two points (degenerate when `a == b`).
//! - `Ellipse`: centre, radii, rotation; `rx == ry` is the circular case.
//! - `CircularArc`, `EllipticalArc`: a shape plus a start angle and signed sweep.
//! - `Bounds2`: axis-aligned bounding box.
//!
//! Points and vectors are nalgebra's `Point2` / `Vector2`.

use nalgebra::{Point2, Vector2};

use crate::error::{GeomError, Result};
use crate::scalar::{convert, Number, Real};

/// Line segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2<T: Number> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Number> Segment2<T> {
    #[inline]
    pub fn new(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    /// `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        Vector2::new(self.b.x - self.a.x, self.b.y - self.a.y)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Ellipse with centre, radii and rotation (radians, counterclockwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse<R: Real> {
    pub center: Point2<R>,
    pub rx: R,
    pub ry: R,
    pub rotation: R,
}

impl<R: Real> Ellipse<R> {
    /// Rejects negative or non-finite radii.
    pub fn new(center: Point2<R>, rx: R, ry: R, rotation: R) -> Result<Self> {
        for r in [rx, ry] {
            if !r.is_finite() || r < R::zero() {
                return Err(GeomError::InvalidRadius {
                    value: format!("{r:?}"),
                });
            }
        }
        Ok(Self {
            center,
            rx,
            ry,
            rotation,
        })
    }

    /// Circle of radius `r`.
    pub fn circle(center: Point2<R>, r: R) -> Result<Self> {
        Self::new(center, r, r, R::zero())
    }

    /// Build from any numeric centre/radii via checked conversion.
    pub fn try_from_parts<T: Number>(center: Point2<T>, rx: T, ry: T, rotation: R) -> Result<Self> {
        let center = Point2::new(convert(center.x)?, convert(center.y)?);
        Self::new(center, convert(rx)?, convert(ry)?, rotation)
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        self.rx == self.ry
    }
}

/// Arc of a circle: `start_angle` plus signed `sweep_angle` (negative = clockwise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularArc<R: Real> {
    pub center: Point2<R>,
    pub radius: R,
    pub start_angle: R,
    pub sweep_angle: R,
}

impl<R: Real> CircularArc<R> {
    pub fn new(center: Point2<R>, radius: R, start_angle: R, sweep_angle: R) -> Result<Self> {
        if !radius.is_finite() || radius < R::zero() {
            return Err(GeomError::InvalidRadius {
                value: format!("{radius:?}"),
            });
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep_angle,
        })
    }
}

/// Arc of an ellipse.
///
/// `start_angle` is measured from the ellipse's rotation: the arc covers the
/// parametric angles `start_angle + rotation ..= start_angle + rotation + sweep_angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticalArc<R: Real> {
    pub ellipse: Ellipse<R>,
    pub start_angle: R,
    pub sweep_angle: R,
}

impl<R: Real> EllipticalArc<R> {
    #[inline]
    pub fn new(ellipse: Ellipse<R>, start_angle: R, sweep_angle: R) -> Self {
        Self {
            ellipse,
            start_angle,
            sweep_angle,
        }
    }
}

/// Axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2<R: Real> {
    pub min: Point2<R>,
    pub max: Point2<R>,
}

impl<R: Real> Bounds2<R> {
    /// Smallest box containing all points; `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<R>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grow to contain `p`.
    #[inline]
    pub fn include(&mut self, p: Point2<R>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[inline]
    pub fn width(&self) -> R {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> R {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn contains(&self, p: Point2<R>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
