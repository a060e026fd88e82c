//! Root selection: pick the landing distance out of the fitted quadratic's roots.
//!
//! Selection rules:
//! 1. Visit roots in `QuadraticRoots::to_vec()` order (larger magnitude first).
//! 2. Complex roots are skipped (`Reject`) or replaced by their real part (`RealPart`).
//! 3. Round each candidate; the first rounded value that is not zero wins.
//! 4. If nothing qualifies, return `NoQualifyingRoot` with the candidates seen.

use log::debug;

use crate::domain::{Coefficients, ComplexPolicy, QuadraticRoots, Root, SelectOptions, SelectedRoot};
use crate::error::FitError;
use crate::math::solve_quadratic;

/// Solve the quadratic and select the first root that does not round to zero.
pub fn select_root(coef: &Coefficients, opts: &SelectOptions) -> Result<SelectedRoot, FitError> {
    let roots = solve_quadratic(coef)?;
    select_from_roots(&roots, opts)
}

/// Apply the selection rules to an already computed root set.
pub fn select_from_roots(roots: &QuadraticRoots, opts: &SelectOptions) -> Result<SelectedRoot, FitError> {
    let mut candidates = Vec::new();

    for (index, root) in roots.to_vec().into_iter().enumerate() {
        let raw = match (root, opts.complex) {
            (Root::Real { value }, _) => value,
            (Root::Complex { re, .. }, ComplexPolicy::RealPart) => re,
            (Root::Complex { re, im }, ComplexPolicy::Reject) => {
                debug!("skipping complex root {re} {im:+}i");
                continue;
            }
        };

        let rounded = opts.rounding.apply(raw);
        if rounded != 0.0 {
            return Ok(SelectedRoot {
                index,
                raw,
                rounded,
            });
        }
        candidates.push(raw);
    }

    Err(FitError::NoQualifyingRoot { candidates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rounding;

    #[test]
    fn picks_non_zero_root() {
        // x² + 2x: roots -2 and 0.
        let sel = select_root(&Coefficients::new(0.0, 2.0, 1.0), &SelectOptions::default()).unwrap();
        assert_eq!(sel.rounded, -2.0);
        assert_eq!(sel.index, 0);
    }

    #[test]
    fn skips_root_that_rounds_to_zero() {
        // (x - 7)(x - 0.25)
        let sel = select_root(&Coefficients::new(1.75, -7.25, 1.0), &SelectOptions::default()).unwrap();
        assert_eq!(sel.rounded, 7.0);

        // Same pair visited in the other order still yields 7.
        let roots = QuadraticRoots::Real {
            first: 0.25,
            second: 7.0,
        };
        let sel = select_from_roots(&roots, &SelectOptions::default()).unwrap();
        assert_eq!(sel.rounded, 7.0);
        assert_eq!(sel.index, 1);
        assert_eq!(sel.raw, 7.0);
    }

    #[test]
    fn tie_breaking_follows_rounding_policy() {
        // (x - 2.5)(x - 0.25) = x² - 2.75x + 0.625
        let coef = Coefficients::new(0.625, -2.75, 1.0);

        let even = select_root(&coef, &SelectOptions::default()).unwrap();
        assert_eq!(even.raw, 2.5);
        assert_eq!(even.rounded, 2.0);

        let away = select_root(
            &coef,
            &SelectOptions {
                rounding: Rounding::HalfAwayFromZero,
                ..SelectOptions::default()
            },
        )
        .unwrap();
        assert_eq!(away.rounded, 3.0);
    }

    #[test]
    fn all_roots_near_zero_is_an_error() {
        // (x - 0.25)(x + 0.25) = x² - 0.0625
        let err = select_root(&Coefficients::new(-0.0625, 0.0, 1.0), &SelectOptions::default())
            .unwrap_err();
        match err {
            FitError::NoQualifyingRoot { candidates } => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn complex_roots_follow_policy() {
        // x² - 4x + 13: 2 ± 3i
        let coef = Coefficients::new(13.0, -4.0, 1.0);

        let err = select_root(&coef, &SelectOptions::default()).unwrap_err();
        assert_eq!(err, FitError::NoQualifyingRoot { candidates: vec![] });

        let sel = select_root(
            &coef,
            &SelectOptions {
                complex: ComplexPolicy::RealPart,
                ..SelectOptions::default()
            },
        )
        .unwrap();
        assert!((sel.raw - 2.0).abs() < 1e-12);
        assert_eq!(sel.rounded, 2.0);
    }

    #[test]
    fn zero_coefficients_are_degenerate() {
        let err = select_root(&Coefficients::new(0.0, 0.0, 0.0), &SelectOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::DegenerateQuadratic { .. }));
    }

    #[test]
    fn linear_case_selects_its_single_root() {
        let sel = select_root(&Coefficients::new(-6.0, 2.0, 0.0), &SelectOptions::default()).unwrap();
        assert_eq!(sel.rounded, 3.0);
    }

    #[test]
    fn huge_linear_term_selects_far_root() {
        let sel = select_root(&Coefficients::new(0.0, 1e200, 1.0), &SelectOptions::default()).unwrap();
        assert_eq!(sel.index, 0);
        assert_eq!(sel.rounded, -1e200);
    }

    #[test]
    fn small_leading_coefficient_visits_far_root_first() {
        let sel = select_root(&Coefficients::new(1e6, 1.0, -1e-7), &SelectOptions::default()).unwrap();
        assert_eq!(sel.index, 0);
        assert_eq!(sel.rounded, 10_916_080.0);
    }

    #[test]
    fn overflowing_discriminant_yields_complex_pair() {
        let err = select_root(&Coefficients::new(1e300, 1e300, 1e300), &SelectOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::NoQualifyingRoot { .. }));
    }
}
