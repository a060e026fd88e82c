//! Export per-sample residuals to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or the table editors.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{QuadraticFit, Sample};
use crate::error::AppError;
use crate::report::compute_residuals;

/// Write `x,y_obs,y_fit,residual` rows for every real sample (the anchor is not exported).
pub fn write_residuals_csv(path: &Path, samples: &[Sample], fit: &QuadraticFit) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "x,y_obs,y_fit,residual")
        .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for r in compute_residuals(samples, fit) {
        writeln!(out, "{},{},{:.6},{:.6}", r.sample.x, r.sample.y, r.y_fit, r.residual)
            .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::input(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
