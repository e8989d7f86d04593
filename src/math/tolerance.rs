//! Tolerance-based floating-point comparison.
//!
//! Two values are considered equal when
//! `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.

use super::{ABS_TOL, REL_TOL};

/// Compares `a` and `b` using the default tolerances
/// ([`REL_TOL`] relative, [`ABS_TOL`] absolute).
#[must_use]
pub fn approx_equal(a: f64, b: f64) -> bool {
    approx_equal_with(a, b, REL_TOL, ABS_TOL)
}

/// Compares `a` and `b` with an explicit relative and absolute tolerance.
///
/// `rel_tol` scales with the larger magnitude of the two operands;
/// `abs_tol` is a floor that matters near zero. Any comparison involving
/// NaN is false, and so is comparing two equal infinities, because their
/// difference is NaN.
#[must_use]
pub fn approx_equal_with(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_are_equal() {
        assert!(approx_equal(1.5, 1.5));
        assert!(approx_equal(0.0, 0.0));
        assert!(approx_equal(-3.0, -3.0));
    }

    #[test]
    fn relative_tolerance_scales_with_magnitude() {
        // 1e-10 relative difference passes at default tolerance.
        assert!(approx_equal(1e6, 1e6 * (1.0 + 1e-10)));
        // 1e-8 relative difference does not.
        assert!(!approx_equal(1e6, 1e6 * (1.0 + 1e-8)));
    }

    #[test]
    fn zero_abs_tol_rejects_tiny_differences_near_zero() {
        assert!(!approx_equal(0.0, 1e-300));
        assert!(approx_equal_with(0.0, 1e-12, REL_TOL, 1e-9));
    }

    #[test]
    fn looser_relative_tolerance() {
        assert!(!approx_equal(100.0, 101.0));
        assert!(approx_equal_with(100.0, 101.0, 0.01, 0.0));
        assert!(!approx_equal_with(100.0, 102.0, 0.01, 0.0));
    }

    #[test]
    fn nan_never_equal() {
        assert!(!approx_equal(f64::NAN, f64::NAN));
        assert!(!approx_equal(f64::NAN, 1.0));
        assert!(!approx_equal_with(1.0, f64::NAN, 1.0, 1.0));
    }

    #[test]
    fn infinities_never_equal() {
        assert!(!approx_equal(f64::INFINITY, f64::INFINITY));
        assert!(!approx_equal(f64::INFINITY, 1e308));
    }

    #[test]
    fn symmetric() {
        let (a, b) = (1.0, 1.0 + 5e-10);
        assert_eq!(approx_equal(a, b), approx_equal(b, a));
    }
}
