//! Roots of `c2·x² + c1·x + c0 = 0`.
//!
//! Numerical notes:
//! - The textbook formula `(-b ± √D) / 2a` loses precision when `b² ≫ 4ac`,
//!   because one of the two numerators cancels. We use the stable form
//!   `q = -(b + sign(b)·√D) / 2`, `x1 = q / a`, `x2 = c / q`.
//! - `x1` always carries the larger magnitude, which also fixes the visiting
//!   order for root selection.
//! - The coefficients are divided by a power of two near their largest
//!   magnitude before `D` is formed. This is exact, leaves the roots unchanged
//!   and keeps `b² - 4ac` finite for any finite input.
//! - Only an exact `c2 = 0` is linear. A tiny `c2` still has a far root; when
//!   that root overflows `f64` the near root `c / q` is reported alone.
//! - `c1` and `c2` both below `COEFF_EPS` times the largest coefficient
//!   magnitude leave no line to intersect, which is `DegenerateQuadratic`.

use crate::domain::{Coefficients, QuadraticRoots};
use crate::error::FitError;
use crate::math::ols::pow2_floor;

/// Relative threshold for treating a coefficient as zero.
pub const COEFF_EPS: f64 = 1e-12;

fn is_negligible(value: f64, scale: f64) -> bool {
    value.abs() <= COEFF_EPS * scale
}

/// Solve the quadratic defined by `coef`.
pub fn solve_quadratic(coef: &Coefficients) -> Result<QuadraticRoots, FitError> {
    let Coefficients { c0, c1, c2 } = *coef;
    if !(c0.is_finite() && c1.is_finite() && c2.is_finite()) {
        return Err(FitError::insufficient("non-finite polynomial coefficients"));
    }

    let scale = coef.scale();
    if is_negligible(c2, scale) && is_negligible(c1, scale) {
        return Err(FitError::DegenerateQuadratic { c1, c2 });
    }
    if c2 == 0.0 {
        return Ok(QuadraticRoots::Linear { root: -c0 / c1 });
    }

    let k = pow2_floor(scale);
    let (a, b, c) = (c2 / k, c1 / k, c0 / k);

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        let re = -b / (2.0 * a);
        let im = ((-disc).sqrt() / (2.0 * a)).abs();
        return Ok(QuadraticRoots::Complex { re, im });
    }

    let sign = if b < 0.0 { -1.0 } else { 1.0 };
    let q = -0.5 * (b + sign * disc.sqrt());
    if q == 0.0 {
        // Only reachable with c1 = 0 and disc = 0, i.e. c2·x² = 0.
        return Ok(QuadraticRoots::Real {
            first: 0.0,
            second: 0.0,
        });
    }

    let first = q / a;
    let second = c / q;
    if !first.is_finite() {
        return Ok(QuadraticRoots::Linear { root: second });
    }
    Ok(QuadraticRoots::Real { first, second })
}
