//! Reporting utilities: residuals and formatted terminal output.

pub mod format;

pub use format::*;

use crate::domain::{QuadraticFit, Sample};

/// A per-sample fitted result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResidual {
    pub sample: Sample,
    pub y_fit: f64,
    pub residual: f64,
}

/// Compute fitted values and residuals for each real sample (the anchor is not included).
pub fn compute_residuals(samples: &[Sample], fit: &QuadraticFit) -> Vec<SampleResidual> {
    samples
        .iter()
        .map(|&sample| {
            let y_fit = fit.coefficients.eval(sample.x);
            SampleResidual {
                sample,
                y_fit,
                residual: sample.y - y_fit,
            }
        })
        .collect()
}

/// The sample the curve misses by the most, if any.
pub fn worst_residual(residuals: &[SampleResidual]) -> Option<SampleResidual> {
    residuals
        .iter()
        .copied()
        .max_by(|a, b| {
            a.residual
                .abs()
                .partial_cmp(&b.residual.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
