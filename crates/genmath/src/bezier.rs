//! Bernstein-form Bezier evaluation over a memoized Pascal's triangle.
//!
//! - `BinomialTable`: append-only rows of binomial coefficients, pre-seeded
//!   through row 6 and extended on demand under a write lock.
//! - `BinomialTable::bezier`: `Σ w_k C(n,k) (1−t)^(n−k) t^k` (explicit sum,
//!   not De Casteljau).
//! - `shared_table`, `binomial`, `bezier`: process-wide f64 instance for callers
//!   that do not want to own a table.

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use nalgebra::Point2;
use tracing::debug;

use crate::cfg::SEEDED_BINOMIAL_ROWS;
use crate::error::{GeomError, Result};
use crate::scalar::{Number, Real};

/// Pascal's triangle cache. Rows only ever grow.
#[derive(Debug)]
pub struct BinomialTable<T: Number> {
    rows: RwLock<Vec<Vec<T>>>,
}

impl<T: Number> Default for BinomialTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> BinomialTable<T> {
    /// Fresh table holding rows 0..=6.
    pub fn new() -> Self {
        let mut rows = vec![vec![T::one()]];
        extend_rows(&mut rows, SEEDED_BINOMIAL_ROWS);
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of rows currently cached.
    pub fn rows(&self) -> usize {
        self.read().len()
    }

    /// `C(n, k)`. Fails with `IndexOutOfBounds` when `k > n`.
    pub fn binomial(&self, n: usize, k: usize) -> Result<T> {
        self.ensure_row(n);
        let rows = self.read();
        let row = rows.get(n).ok_or(GeomError::IndexOutOfBounds {
            index: n,
            len: rows.len(),
        })?;
        row.get(k).copied().ok_or(GeomError::IndexOutOfBounds {
            index: k,
            len: row.len(),
        })
    }

    /// Row `n` of the triangle (`n + 1` entries), extending the table if needed.
    pub fn row(&self, n: usize) -> Result<Vec<T>> {
        self.ensure_row(n);
        let rows = self.read();
        rows.get(n).cloned().ok_or(GeomError::IndexOutOfBounds {
            index: n,
            len: rows.len(),
        })
    }

    /// Grow the table until it holds row `n`.
    fn ensure_row(&self, n: usize) {
        if self.read().len() > n {
            return;
        }
        let mut rows = self.write();
        // Another writer may have extended the table while we waited.
        if rows.len() <= n {
            debug!(from = rows.len(), to = n + 1, "extending binomial table");
            extend_rows(&mut rows, n + 1);
        }
    }

    // The table is append-only, so a poisoned lock still guards valid rows.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Vec<T>>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Vec<T>>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Real> BinomialTable<R> {
    /// Degree-`n` Bezier value at `t` for scalar `weights`.
    ///
    /// `weights` must hold at least `n + 1` entries; extra entries are ignored.
    pub fn bezier(&self, n: usize, t: R, weights: &[R]) -> Result<R> {
        let degree = i32::try_from(n).map_err(|_| {
            GeomError::Unsupported(format!("bezier degree {n} exceeds the powi exponent range"))
        })?;
        if weights.len() <= n {
            return Err(GeomError::IndexOutOfBounds {
                index: n,
                len: weights.len(),
            });
        }
        self.ensure_row(n);
        let rows = self.read();
        let coeffs = rows.get(n).ok_or(GeomError::IndexOutOfBounds {
            index: n,
            len: rows.len(),
        })?;
        let mt = R::one() - t;
        let mut sum = R::zero();
        for (k, (&w, &c)) in (0..=degree).zip(weights.iter().zip(coeffs.iter())) {
            sum += w * c * mt.powi(degree - k) * t.powi(k);
        }
        Ok(sum)
    }

    /// Bezier curve point at `t` for a control polygon of `len - 1` degree.
    pub fn bezier_point(&self, t: R, control: &[Point2<R>]) -> Result<Point2<R>> {
        let Some(n) = control.len().checked_sub(1) else {
            return Err(GeomError::IndexOutOfBounds { index: 0, len: 0 });
        };
        let xs: Vec<R> = control.iter().map(|p| p.x).collect();
        let ys: Vec<R> = control.iter().map(|p| p.y).collect();
        Ok(Point2::new(self.bezier(n, t, &xs)?, self.bezier(n, t, &ys)?))
    }
}

/// Append rows until `rows.len() == target`. `rows` must hold at least row 0.
fn extend_rows<T: Number>(rows: &mut Vec<Vec<T>>, target: usize) {
    while rows.len() < target {
        let Some(prev) = rows.last() else {
            rows.push(vec![T::one()]);
            continue;
        };
        let mut next = Vec::with_capacity(prev.len() + 1);
        next.push(T::one());
        for pair in prev.windows(2) {
            next.push(pair[0] + pair[1]);
        }
        next.push(T::one());
        rows.push(next);
    }
}

static SHARED: OnceLock<BinomialTable<f64>> = OnceLock::new();

/// Process-wide f64 table.
pub fn shared_table() -> &'static BinomialTable<f64> {
    SHARED.get_or_init(BinomialTable::new)
}

/// `C(n, k)` from the shared table.
pub fn binomial(n: usize, k: usize) -> Result<f64> {
    shared_table().binomial(n, k)
}

/// [`BinomialTable::bezier`] on the shared table.
pub fn bezier(n: usize, t: f64, weights: &[f64]) -> Result<f64> {
    shared_table().bezier(n, t, weights)
}

/// [`BinomialTable::bezier_point`] on the shared table.
pub fn bezier_point(t: f64, control: &[Point2<f64>]) -> Result<Point2<f64>> {
    shared_table().bezier_point(t, control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;
    use proptest::prelude::*;

    #[test]
    fn seeded_rows_and_known_values() {
        let table = BinomialTable::<u64>::new();
        assert_eq!(table.rows(), 7);
        assert_eq!(table.binomial(4, 2).unwrap(), 6);
        assert_eq!(table.binomial(6, 3).unwrap(), 20);
        assert_eq!(table.row(5).unwrap(), vec![1, 5, 10, 10, 5, 1]);
        assert_eq!(table.rows(), 7);
    }

    #[test]
    fn grows_on_demand_and_never_shrinks() {
        let table = BinomialTable::<u64>::new();
        assert_eq!(table.binomial(10, 5).unwrap(), 252);
        assert_eq!(table.rows(), 11);
        assert_eq!(table.binomial(3, 1).unwrap(), 3);
        assert_eq!(table.rows(), 11);
        assert_eq!(table.binomial(20, 10).unwrap(), 184_756);
    }

    #[test]
    fn k_beyond_n_is_out_of_bounds() {
        let table = BinomialTable::<u32>::new();
        assert_eq!(
            table.binomial(3, 4),
            Err(GeomError::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn shared_table_matches_fresh_table() {
        let fresh = BinomialTable::<f64>::new();
        for n in 0..15 {
            for k in 0..=n {
                assert_eq!(binomial(n, k).unwrap(), fresh.binomial(n, k).unwrap());
            }
        }
    }

    #[test]
    fn bezier_linear_and_quadratic() {
        let table = BinomialTable::<f64>::new();
        assert!((table.bezier(1, 0.25, &[2.0, 6.0]).unwrap() - 3.0).abs() < 1e-12);
        // Quadratic with weights 0, 1, 0 peaks at t = 0.5 with 2·0.5·0.5.
        assert!((table.bezier(2, 0.5, &[0.0, 1.0, 0.0]).unwrap() - 0.5).abs() < 1e-12);
        // Extra weights are ignored.
        assert!((table.bezier(1, 1.0, &[2.0, 6.0, 100.0]).unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn bezier_short_weights_fail() {
        assert_eq!(
            bezier(3, 0.5, &[1.0, 2.0, 3.0]),
            Err(GeomError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn bezier_degree_beyond_powi_is_unsupported() {
        // Rejected before the weights are inspected or the table grows.
        let table = BinomialTable::<f64>::new();
        let err = table.bezier(usize::MAX, 0.5, &[1.0]).unwrap_err();
        assert!(matches!(err, GeomError::Unsupported(_)));
        assert_eq!(table.rows(), 7);
    }

    #[test]
    fn lookups_do_not_grow_past_the_requested_row() {
        let table = BinomialTable::<u64>::new();
        assert_eq!(table.binomial(9, 4).unwrap(), 126);
        assert_eq!(table.rows(), 10);
        assert_eq!(table.binomial(9, 10), Err(GeomError::IndexOutOfBounds { index: 10, len: 10 }));
        assert_eq!(table.rows(), 10);
    }

    #[test]
    fn bezier_point_endpoints_and_empty() {
        let control = [point![0.0, 0.0], point![1.0, 2.0], point![3.0, 0.0]];
        let start = bezier_point(0.0, &control).unwrap();
        let end = bezier_point(1.0, &control).unwrap();
        assert!((start - control[0]).norm() < 1e-12);
        assert!((end - control[2]).norm() < 1e-12);
        let mid = bezier_point(0.5, &control).unwrap();
        assert!((mid - point![1.25, 1.0]).norm() < 1e-12);
        assert!(bezier_point(0.5, &[]).is_err());
    }

    #[test]
    fn concurrent_growth_is_consistent() {
        let table = BinomialTable::<u64>::new();
        std::thread::scope(|s| {
            for n in [12usize, 18, 25, 30] {
                let table = &table;
                s.spawn(move || {
                    assert_eq!(table.binomial(n, 0).unwrap(), 1);
                    assert_eq!(table.binomial(n, n).unwrap(), 1);
                });
            }
        });
        assert_eq!(table.rows(), 31);
        assert_eq!(table.binomial(30, 15).unwrap(), 155_117_520);
    }

    proptest! {
        #[test]
        fn binomial_symmetry(n in 0usize..40, k_frac in 0.0..=1.0f64) {
            let k = ((n as f64) * k_frac).round() as usize;
            let table = BinomialTable::<u64>::new();
            prop_assert_eq!(table.binomial(n, k).unwrap(), table.binomial(n, n - k).unwrap());
            prop_assert_eq!(table.binomial(n, 0).unwrap(), 1);
            prop_assert_eq!(table.binomial(n, n).unwrap(), 1);
        }

        #[test]
        fn linear_bezier_interpolates(p0 in -100.0..100.0f64, p1 in -100.0..100.0f64, t in 0.0..=1.0f64) {
            let expected = p0 * (1.0 - t) + p1 * t;
            prop_assert!((bezier(1, t, &[p0, p1]).unwrap() - expected).abs() < 1e-9);
        }
    }
}
