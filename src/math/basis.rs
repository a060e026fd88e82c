//! Power basis for the quadratic trajectory model.
//!
//! A design row for sample `x` is `[x^0, x^1, x^2]`, intercept first, so the
//! solved coefficient vector reads `(c0, c1, c2)`.

use nalgebra::{DMatrix, DVector};

use crate::domain::Sample;

/// Number of basis functions (and unknown coefficients).
pub const QUADRATIC_TERMS: usize = 3;

/// Fill a design row for `x`.
///
/// # Panics
/// Panics if `out` is shorter than `QUADRATIC_TERMS`.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    out[0] = 1.0;
    out[1] = x;
    out[2] = x * x;
}

/// Build the design matrix `A` and target vector `B` for a set of rows.
pub fn design_system(rows: &[Sample]) -> (DMatrix<f64>, DVector<f64>) {
    let n = rows.len();
    let mut a = DMatrix::<f64>::zeros(n, QUADRATIC_TERMS);
    let mut b = DVector::<f64>::zeros(n);
    let mut row = [0.0; QUADRATIC_TERMS];

    for (i, s) in rows.iter().enumerate() {
        fill_design_row(s.x, &mut row);
        for (j, v) in row.iter().enumerate() {
            a[(i, j)] = *v;
        }
        b[i] = s.y;
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_rows_are_powers_of_x() {
        let rows = [Sample::new(0.0, 0.0), Sample::new(2.0, 8.0), Sample::new(-3.0, 1.5)];
        let (a, b) = design_system(&rows);

        assert_eq!(a.shape(), (3, 3));
        assert_eq!(a.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 0.0, 0.0]);
        assert_eq!(a.row(1).iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 4.0]);
        assert_eq!(a.row(2).iter().copied().collect::<Vec<_>>(), vec![1.0, -3.0, 9.0]);
        assert_eq!(b.as_slice(), &[0.0, 8.0, 1.5]);
    }
}
