//! Curve fitting and root selection.
//!
//! Responsibilities:
//!
//! - fit the quadratic trajectory by least squares (`fitter`)
//! - pick the landing root (`selection`)
//! - expose the one-call entry point used by front-ends (`fit_and_solve`)

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;

use crate::domain::{FitOptions, Sample, SelectOptions, Solution};
use crate::error::FitError;
use crate::math::solve_quadratic;

/// Fit `samples` with the default options and return the rounded landing distance.
///
/// This is the whole interface a table/plot front-end needs: pairs in, distance out.
pub fn fit_and_solve(samples: &[Sample]) -> Result<f64, FitError> {
    let solution = fit_and_solve_with(samples, &FitOptions::default(), &SelectOptions::default())?;
    Ok(solution.distance())
}

/// Fit and select with explicit options, keeping every intermediate result.
pub fn fit_and_solve_with(
    samples: &[Sample],
    fit_opts: &FitOptions,
    select_opts: &SelectOptions,
) -> Result<Solution, FitError> {
    let fit = fit_quadratic(samples, fit_opts)?;
    let roots = solve_quadratic(&fit.coefficients)?;
    let selected = select_from_roots(&roots, select_opts)?;
    Ok(Solution {
        fit,
        roots,
        selected,
    })
}
