//! Tolerance defaults.
//!
//! Policy
//! - Defaults are fixed constants; `GeomCfg` exists for callers (the CLI) that
//!   need to override them per run without touching call sites.

use crate::scalar::{real_or, Real};

/// Absolute tolerance for boundary-inclusive comparisons (`approximately_between`).
pub const APPROX_EPS: f64 = 1e-12;

/// Rows of Pascal's triangle present in a fresh `BinomialTable` (rows 0..=6).
pub(crate) const SEEDED_BINOMIAL_ROWS: usize = 7;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Boundary tolerance for `approximately_between`.
    pub eps_approx: f64,
    /// Threshold for the cross-product sign tests in `vector_between`.
    /// `None` selects the scalar type's smallest positive value.
    pub eps_vector: Option<f64>,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_approx: APPROX_EPS,
            eps_vector: None,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub fn eps_approx<R: Real>(&self) -> R {
        real_or(self.eps_approx, R::epsilon())
    }

    #[inline]
    pub fn eps_vector<R: Real>(&self) -> R {
        match self.eps_vector {
            Some(eps) => real_or(eps, R::min_positive_value()),
            None => R::min_positive_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_scalar_type() {
        let cfg = GeomCfg::default();
        assert_eq!(cfg.eps_approx::<f64>(), 1e-12);
        assert_eq!(cfg.eps_vector::<f64>(), f64::MIN_POSITIVE);
        assert_eq!(cfg.eps_vector::<f32>(), f32::MIN_POSITIVE);
        let custom = GeomCfg {
            eps_vector: Some(1e-6),
            ..cfg
        };
        assert_eq!(custom.eps_vector::<f64>(), 1e-6);
    }
}
