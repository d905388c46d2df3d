//! Angle and vector betweenness predicates.
//!
//! Angles are radians. `angle_between` works on angles normalized upward from
//! the lower bound; `angle_within` works on a start angle plus signed sweep and
//! uses truncated remainders, so wrapped values lie in (−τ, τ).

use crate::cfg::{GeomCfg, APPROX_EPS};
use crate::scalar::{approx_eq, cross, real_or, tau, Number, Real};

/// Whether `c` lies on the counterclockwise run from `a` to `b`.
///
/// `a` is normalized into `[0, τ)`; `b` and `c` are raised by the fewest whole
/// turns that bring them to at least `a`. A sweep of exactly one full turn is boundary-sensitive
/// (depends on rounding in the remainder). Non-finite inputs yield `false`.
pub fn angle_between<R: Real>(c: R, a: R, b: R) -> bool {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return false;
    }
    let tau = tau::<R>();
    let mut a = a % tau;
    if a < R::zero() {
        a += tau;
    }
    let b = raise_to(b, a, tau);
    let c = raise_to(c, a, tau);
    c <= b
}

/// Smallest `v + k·τ` (k ≥ 0) that is at least `floor`.
///
/// Whole turns are added in one step; the loop only absorbs rounding and stops
/// once `v` is too large in magnitude for `+ τ` to change it.
fn raise_to<R: Real>(v: R, floor: R, tau: R) -> R {
    let mut v = v;
    if v < floor {
        v += ((floor - v) / tau).ceil() * tau;
    }
    while v < floor {
        let next = v + tau;
        if next == v {
            break;
        }
        v = next;
    }
    v
}

/// Whether `angle` lies on the arc starting at `start_angle` and sweeping
/// `sweep_angle` (negative = clockwise). Sweeps beyond one turn contain everything.
pub fn angle_within<R: Real>(angle: R, start_angle: R, sweep_angle: R) -> bool {
    let tau = tau::<R>();
    if sweep_angle.abs() > tau {
        return true;
    }
    let start = start_angle % tau;
    let end = (start_angle + sweep_angle) % tau;
    let angle = angle % tau;

    if sweep_angle > R::zero() {
        if start < end {
            angle >= start && angle <= end
        } else {
            angle >= start || angle <= end
        }
    } else if start < end {
        angle <= start || angle >= end
    } else {
        angle <= start && angle >= end
    }
}

/// Whether vector 0 lies angularly between vectors 1 and 2 (inside the
/// smaller angle they span). Products of cross products are compared against
/// `-epsilon` rather than zero.
pub fn vector_between_vector_vector<T: Number>(
    i0: T,
    j0: T,
    i1: T,
    j1: T,
    i2: T,
    j2: T,
    epsilon: T,
) -> bool {
    let floor = T::zero() - epsilon;
    cross(i1, j1, i0, j0) * cross(i1, j1, i2, j2) >= floor
        && cross(i2, j2, i0, j0) * cross(i2, j2, i1, j1) >= floor
}

/// [`vector_between_vector_vector`] with the type's smallest positive value as epsilon.
#[inline]
pub fn vector_between<R: Real>(i0: R, j0: R, i1: R, j1: R, i2: R, j2: R) -> bool {
    vector_between_vector_vector(i0, j0, i1, j1, i2, j2, R::min_positive_value())
}

/// [`vector_between_vector_vector`] with the epsilon taken from `cfg`.
#[inline]
pub fn vector_between_cfg<R: Real>(i0: R, j0: R, i1: R, j1: R, i2: R, j2: R, cfg: &GeomCfg) -> bool {
    vector_between_vector_vector(i0, j0, i1, j1, i2, j2, cfg.eps_vector())
}

/// `lo <= v <= hi`, with both bounds widened by [`APPROX_EPS`].
#[inline]
pub fn approximately_between<R: Real>(v: R, lo: R, hi: R) -> bool {
    approximately_between_eps(v, lo, hi, real_or(APPROX_EPS, R::epsilon()))
}

/// `lo <= v <= hi`, or `v` within `eps` of either bound.
pub fn approximately_between_eps<R: Real>(v: R, lo: R, hi: R, eps: R) -> bool {
    (lo <= v && v <= hi) || approx_eq(v, lo, eps) || approx_eq(v, hi, eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[test]
    fn angle_between_wraps_bounds() {
        // Plain interval.
        assert!(angle_between(1.0, 0.5, 2.0));
        assert!(!angle_between(3.0, 0.5, 2.0));
        // Interval crossing zero: 350° → 10°.
        let a = 350f64.to_radians();
        let b = 10f64.to_radians();
        assert!(angle_between(0.0, a, b));
        assert!(angle_between(5f64.to_radians(), a, b));
        assert!(!angle_between(PI, a, b));
        // Negative lower bound is normalized first.
        assert!(angle_between(0.1, -0.2, 0.3));
        assert!(!angle_between(-1.0, -0.2, 0.3));
    }

    #[test]
    fn angle_between_full_turn_is_boundary_sensitive() {
        // b == a + τ: interior angles are accepted; the exact result at the
        // bounds depends on rounding and is not asserted.
        assert!(angle_between(PI, 0.0, TAU));
        assert!(angle_between(0.5, 0.25, 0.25 + TAU));
    }

    #[test]
    fn angle_between_non_finite_is_false() {
        assert!(!angle_between(f64::NEG_INFINITY, 0.0, 1.0));
        assert!(!angle_between(0.5, 0.0, f64::NAN));
    }

    #[test]
    fn angle_between_huge_finite_inputs_terminate() {
        // τ is below the spacing of f64 at 1e17, so stepping by whole turns stalls.
        let _ = angle_between(0.0, 0.0, -1e17);
        let _ = angle_between(-1e17, 0.0, 1.0);
        let _ = angle_between(-f64::MAX, 1.0, -f64::MAX);
        // Many turns below the lower bound still land in the right place.
        assert!(angle_between(0.5 - 1000.0 * TAU, 0.25, 1.0 - 50.0 * TAU));
        assert!(!angle_between(2.0 - 1000.0 * TAU, 0.25, 1.0 - 50.0 * TAU));
    }

    #[test]
    fn raise_to_matches_turn_by_turn_stepping() {
        let mut v = -50.0f64;
        while v < 10.0 {
            let mut stepped = v;
            while stepped < 0.75 {
                stepped += TAU;
            }
            assert!((raise_to(v, 0.75, TAU) - stepped).abs() < 1e-9);
            v += 0.37;
        }
    }

    #[test]
    fn angle_within_branches() {
        // sweep > 0, start < end
        assert!(angle_within(0.0, -FRAC_PI_4, PI));
        assert!(angle_within(FRAC_PI_2, -FRAC_PI_4, PI));
        assert!(!angle_within(PI, -FRAC_PI_4, PI));
        // sweep > 0, start >= end (wraps through zero)
        let start = 5.0 * FRAC_PI_4;
        assert!(angle_within(0.0, start, PI));
        assert!(angle_within(3.0 * FRAC_PI_2, start, PI));
        assert!(!angle_within(FRAC_PI_2, start, PI));
        // sweep < 0, start >= end
        assert!(angle_within(0.0, FRAC_PI_4, -PI));
        assert!(angle_within(-FRAC_PI_2, FRAC_PI_4, -PI));
        assert!(!angle_within(FRAC_PI_2, FRAC_PI_4, -PI));
        // sweep < 0, start < end: the end wraps past -τ
        assert!(angle_within(0.0, -6.0, -0.5));
        assert!(angle_within(-6.1, -6.0, -0.5));
        assert!(!angle_within(-0.5, -6.0, -0.5));
    }

    #[test]
    fn angle_within_over_full_turn() {
        assert!(angle_within(1.234, 0.0, TAU + 0.01));
        assert!(angle_within(-3.0, 2.0, -(TAU + 0.01)));
    }

    #[test]
    fn vector_between_bisector() {
        assert!(vector_between(1.0, 1.0, 1.0, 0.0, 0.0, 1.0));
        assert!(!vector_between(-1.0, -1.0, 1.0, 0.0, 0.0, 1.0));
        assert!(!vector_between(1.0, -0.5, 1.0, 0.0, 0.0, 1.0));
        // Integer inputs with an explicit epsilon.
        assert!(vector_between_vector_vector(2, 1, 1, 0, 0, 1, 0));
        // Collinear with a bound counts as between.
        assert!(vector_between(2.0, 0.0, 1.0, 0.0, 0.0, 1.0));
        assert!(vector_between_cfg(1.0, 1.0, 1.0, 0.0, 0.0, 1.0, &GeomCfg::default()));
    }

    #[test]
    fn approximately_between_tolerates_bounds() {
        assert!(approximately_between(0.5, 0.0, 1.0));
        assert!(approximately_between(1.0 + 1e-13, 0.0, 1.0));
        assert!(approximately_between(-1e-13, 0.0, 1.0));
        assert!(!approximately_between(1.0 + 1e-9, 0.0, 1.0));
        assert!(approximately_between_eps(1.05, 0.0, 1.0, 0.1));
    }

    proptest! {
        #[test]
        fn sweeps_beyond_a_turn_contain_everything(angle in -20.0..20.0f64, start in -20.0..20.0f64, extra in 0.001..10.0f64) {
            prop_assert!(angle_within(angle, start, TAU + extra));
            prop_assert!(angle_within(angle, start, -(TAU + extra)));
        }

        #[test]
        fn angle_between_accepts_its_lower_bound(a in 0.0..6.0f64, span in 0.0..6.0f64) {
            prop_assert!(angle_between(a, a, a + span));
        }
    }
}
