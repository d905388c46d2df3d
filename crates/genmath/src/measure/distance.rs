//! Euclidean distances between points, lines and segments.
//!
//! Inputs are any `Number` (integer points are fine); outputs are `Real`.
//! Sums of products are formed in the input type with overflow-checked
//! arithmetic and converted with `scalar::convert` before any square root.
//! Integer overflow surfaces as `GeomError::Overflow`.

use nalgebra::{Point, Point2, Vector2};
use tracing::trace;

use crate::error::Result;
use crate::scalar::{
    checked_add, checked_cross, checked_dot, checked_mul, checked_sub, convert, Number, Real,
};
use crate::types::Segment2;

/// Squared distance, computed in the input type.
#[inline]
pub fn distance_sq<T: Number, const D: usize>(p1: &Point<T, D>, p2: &Point<T, D>) -> Result<T> {
    p1.coords
        .iter()
        .zip(p2.coords.iter())
        .try_fold(T::zero(), |acc, (&a, &b)| {
            let d = checked_sub(b, a)?;
            checked_add(acc, checked_mul(d, d)?)
        })
}

/// `sqrt(Σ (p2_i − p1_i)²)` for points of any dimension.
#[inline]
pub fn distance<T: Number, R: Real, const D: usize>(p1: &Point<T, D>, p2: &Point<T, D>) -> Result<R> {
    let sq: R = convert(distance_sq(p1, p2)?)?;
    Ok(sq.sqrt())
}

/// Distance from `p` to the infinite line through `a` with direction `dir`.
///
/// `dir` need not be normalized. A zero direction degrades to `distance(a, p)`.
pub fn distance_line_point<T: Number, R: Real>(
    a: &Point2<T>,
    dir: &Vector2<T>,
    p: &Point2<T>,
) -> Result<R> {
    if dir.x == T::zero() && dir.y == T::zero() {
        trace!("zero direction vector; using point distance");
        return distance(a, p);
    }
    let vi = checked_sub(a.x, p.x)?;
    let vj = checked_sub(a.y, p.y)?;
    let area: R = convert(checked_cross(dir.x, dir.y, vi, vj)?)?;
    let len_sq: R = convert(checked_dot(dir.x, dir.y, dir.x, dir.y)?)?;
    Ok(area.abs() / len_sq.sqrt())
}

/// Projection parameter of `p` onto `a → b`; `None` for a degenerate segment.
fn projection<T: Number, R: Real>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> Result<Option<R>> {
    let di = checked_sub(b.x, a.x)?;
    let dj = checked_sub(b.y, a.y)?;
    if di == T::zero() && dj == T::zero() {
        return Ok(None);
    }
    let len_sq: R = convert(checked_dot(di, dj, di, dj)?)?;
    let (pi, pj) = (checked_sub(p.x, a.x)?, checked_sub(p.y, a.y)?);
    let along: R = convert(checked_dot(pi, pj, di, dj)?)?;
    Ok(Some(along / len_sq))
}

/// Distance from `p` to the point `a + t (b − a)`.
fn foot_distance<T: Number, R: Real>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>, t: R) -> Result<R> {
    let (ax, ay): (R, R) = (convert(a.x)?, convert(a.y)?);
    let (bx, by): (R, R) = (convert(b.x)?, convert(b.y)?);
    let (px, py): (R, R) = (convert(p.x)?, convert(p.y)?);
    let fx = ax + t * (bx - ax);
    let fy = ay + t * (by - ay);
    let (dx, dy) = (px - fx, py - fy);
    Ok((dx * dx + dy * dy).sqrt())
}

/// Distance from `p` to the segment `a → b`.
///
/// When the perpendicular foot falls outside the segment the nearer end point
/// is used. A degenerate segment degrades to `distance(a, p)`.
pub fn distance_line_segment_point<T: Number, R: Real>(
    a: &Point2<T>,
    b: &Point2<T>,
    p: &Point2<T>,
) -> Result<R> {
    match projection::<T, R>(a, b, p)? {
        None => {
            trace!("degenerate segment; using point distance");
            distance(a, p)
        }
        Some(t) if t < R::zero() => distance(a, p),
        Some(t) if t > R::one() => distance(b, p),
        Some(t) => foot_distance(a, b, p, t),
    }
}

/// Like [`distance_line_segment_point`], but `None` when `p` is outside the
/// perpendicular slab of the segment (`t ∉ [0, 1]`) or the segment is degenerate.
///
/// `None` means "not applicable", never zero.
pub fn constrained_distance_line_segment_point<T: Number, R: Real>(
    a: &Point2<T>,
    b: &Point2<T>,
    p: &Point2<T>,
) -> Result<Option<R>> {
    match projection::<T, R>(a, b, p)? {
        Some(t) if t >= R::zero() && t <= R::one() => foot_distance(a, b, p, t).map(Some),
        _ => Ok(None),
    }
}

/// Perpendicular distance from `p` to the line through `segment`, via the
/// triangle area (shoelace determinant) divided by the base length.
pub fn perpendicular_distance<T: Number, R: Real>(segment: &Segment2<T>, p: &Point2<T>) -> Result<R> {
    let Segment2 { a, b } = segment;
    if segment.is_degenerate() {
        trace!("degenerate segment; using point distance");
        return distance(a, p);
    }
    let area2 = checked_cross(
        checked_sub(b.x, a.x)?,
        checked_sub(b.y, a.y)?,
        checked_sub(a.x, p.x)?,
        checked_sub(a.y, p.y)?,
    )?;
    let area2: R = convert(area2)?;
    let base: R = distance(a, b)?;
    Ok(area2.abs() / base)
}

impl<T: Number> Segment2<T> {
    pub fn length<R: Real>(&self) -> Result<R> {
        distance(&self.a, &self.b)
    }

    /// See [`distance_line_segment_point`].
    pub fn distance_to<R: Real>(&self, p: &Point2<T>) -> Result<R> {
        distance_line_segment_point(&self.a, &self.b, p)
    }

    /// See [`constrained_distance_line_segment_point`].
    pub fn constrained_distance_to<R: Real>(&self, p: &Point2<T>) -> Result<Option<R>> {
        constrained_distance_line_segment_point(&self.a, &self.b, p)
    }

    /// See [`perpendicular_distance`].
    pub fn perpendicular_distance_to<R: Real>(&self, p: &Point2<T>) -> Result<R> {
        perpendicular_distance(self, p)
    }
}
