//! Quadratic least-squares fitting.
//!
//! Given samples `(x_i, y_i)` we solve
//!
//! ```text
//! minimize Σ (y_i - c0 - c1·x_i - c2·x_i²)^2
//! ```
//!
//! When `anchor_at_origin` is set, the sample `(0, 0)` is prepended first. The
//! anchor is an ordinary row: it pulls the curve towards the launch point but
//! does not force `c0 = 0` when the data disagree.

use log::{debug, warn};

use crate::domain::{Coefficients, Determination, FitOptions, FitQuality, QuadraticFit, Sample};
use crate::error::FitError;
use crate::math::{QUADRATIC_TERMS, design_system, solve_least_squares};

/// Fit `y = c0 + c1·x + c2·x²` to `samples`.
pub fn fit_quadratic(samples: &[Sample], opts: &FitOptions) -> Result<QuadraticFit, FitError> {
    if let Some((i, s)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(FitError::insufficient(format!(
            "sample {i} has a non-finite value (x={}, y={})",
            s.x, s.y
        )));
    }
    if samples.len() < opts.min_samples {
        return Err(FitError::insufficient(format!(
            "need at least {} sample(s), got {}",
            opts.min_samples,
            samples.len()
        )));
    }

    if let Some((i, s)) = samples.iter().enumerate().find(|(_, s)| !(s.x * s.x).is_finite()) {
        return Err(FitError::insufficient(format!(
            "sample {i} is out of range: x={} overflows x²",
            s.x
        )));
    }

    let rows = anchored_rows(samples, opts.anchor_at_origin);
    if rows.is_empty() {
        return Err(FitError::insufficient("no rows to fit"));
    }

    let determination = Determination::from_rows(rows.len(), QUADRATIC_TERMS);
    if determination == Determination::Under {
        warn!(
            "only {} row(s) for {QUADRATIC_TERMS} coefficients; using the minimum-norm solution",
            rows.len()
        );
    }

    let (a, b) = design_system(&rows);
    let Some(beta) = solve_least_squares(&a, &b) else {
        return Err(FitError::insufficient(
            "least squares solve produced no finite solution",
        ));
    };

    let coefficients = Coefficients::new(beta[0], beta[1], beta[2]);
    let sse: f64 = rows
        .iter()
        .map(|s| {
            let r = s.y - coefficients.eval(s.x);
            r * r
        })
        .sum();
    let n = rows.len();
    let rmse = (sse / n as f64).sqrt();

    debug!(
        "fit: n={n} anchored={} c=({:.6}, {:.6}, {:.6}) sse={sse:.6e}",
        opts.anchor_at_origin, coefficients.c0, coefficients.c1, coefficients.c2
    );

    Ok(QuadraticFit {
        coefficients,
        quality: FitQuality {
            n,
            sse,
            rmse,
            determination,
        },
        anchored: opts.anchor_at_origin,
    })
}

fn anchored_rows(samples: &[Sample], anchor: bool) -> Vec<Sample> {
    let mut rows = Vec::with_capacity(samples.len() + usize::from(anchor));
    if anchor {
        rows.push(Sample::ORIGIN);
    }
    rows.extend_from_slice(samples);
    rows
}
