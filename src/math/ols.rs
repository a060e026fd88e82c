//! Least squares solver.
//!
//! We solve tiny linear regression problems of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T c)^2
//! ```
//!
//! Implementation choices:
//! - SVD handles every shape we meet: square, tall (more samples than unknowns)
//!   and wide (fewer samples than unknowns). Nalgebra's `QR::solve` is intended
//!   for square systems and will panic for non-square matrices.
//! - Singular values below `σ_max · max(rows, cols) · ε` are treated as zero, so
//!   rank-deficient and underdetermined systems return the minimum-norm solution
//!   instead of failing.
//! - The system is rescaled by powers of two before the SVD so that huge but
//!   finite entries cannot overflow inside the decomposition. A single factor
//!   for the whole matrix keeps the minimum-norm solution unchanged.

use nalgebra::{DMatrix, DVector};

/// Largest power of two not above `|v|`, or `1.0` when `v` is zero or subnormal.
///
/// Dividing by this factor is exact, so rescaled values keep every bit.
pub fn pow2_floor(v: f64) -> f64 {
    let v = v.abs();
    if v.is_normal() {
        f64::from_bits(v.to_bits() & 0x7ff0_0000_0000_0000)
    } else {
        1.0
    }
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the inputs are not finite, or the solve fails or produces
/// non-finite values.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() == 0 || x.nrows() != y.len() {
        return None;
    }
    if !(x.iter().all(|v| v.is_finite()) && y.iter().all(|v| v.is_finite())) {
        return None;
    }

    let x_scale = pow2_floor(x.amax());
    let y_scale = pow2_floor(y.amax());
    let xs = x / x_scale;
    let ys = y / y_scale;

    let svd = xs.svd(true, true);
    let sigma_max = svd.singular_values.max();
    let eps = sigma_max * (x.nrows().max(x.ncols()) as f64) * f64::EPSILON;

    let beta = svd.solve(&ys, eps).ok()? * (y_scale / x_scale);
    if beta.iter().all(|v| v.is_finite()) {
        Some(beta)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn underdetermined_returns_minimum_norm() {
        // One equation, two unknowns: a + 2b = 5. Minimum norm is (1, 2).
        let x = DMatrix::from_row_slice(1, 2, &[1.0, 2.0]);
        let y = DVector::from_row_slice(&[5.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 1.0).abs() < 1e-10);
        assert!((beta[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn huge_finite_entries_are_rescaled() {
        // y = 1e200·x on x = [1, 2]: the normal equations would overflow, the scaled SVD does not.
        let x = DMatrix::from_row_slice(2, 1, &[1e200, 2e200]);
        let y = DVector::from_row_slice(&[1e200, 2e200]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_entries_are_rejected() {
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, f64::INFINITY]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        assert!(solve_least_squares(&x, &y).is_none());

        let x = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[f64::NAN, 2.0]);
        assert!(solve_least_squares(&x, &y).is_none());
    }

    #[test]
    fn pow2_floor_is_exact() {
        assert_eq!(pow2_floor(3.0), 2.0);
        assert_eq!(pow2_floor(-7.25), 4.0);
        assert_eq!(pow2_floor(1.0), 1.0);
        assert_eq!(pow2_floor(0.0), 1.0);
        assert_eq!(pow2_floor(1e300), 2f64.powi(996));
    }

    #[test]
    fn empty_system_is_rejected() {
        let x = DMatrix::<f64>::zeros(0, 3);
        let y = DVector::<f64>::zeros(0);
        assert!(solve_least_squares(&x, &y).is_none());
    }
}
