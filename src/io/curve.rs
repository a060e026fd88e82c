//! Read/write fit report JSON files.
//!
//! The fit report is the "portable" representation of a run:
//! - options, coefficients and fit quality
//! - roots and the selected landing distance
//! - a precomputed trajectory grid for quick plotting
//!
//! The schema is defined by `domain::FitReport`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{FitOptions, FitReport, SelectOptions, Solution, TrajectoryGrid};
use crate::error::AppError;
use crate::io::ingest::IngestedSamples;

/// Number of points in the exported trajectory grid.
pub const GRID_POINTS: usize = 101;

/// Assemble a report from a finished run.
pub fn build_report(
    solution: &Solution,
    ingest: &IngestedSamples,
    fit_options: &FitOptions,
    select_options: &SelectOptions,
) -> FitReport {
    FitReport {
        tool: "pfit".to_string(),
        generated_at: Local::now(),
        source: ingest.source.as_ref().map(|p| p.display().to_string()),
        stats: ingest.stats.clone(),
        fit_options: fit_options.clone(),
        select_options: *select_options,
        coefficients: solution.fit.coefficients,
        quality: solution.fit.quality.clone(),
        roots: solution.roots.clone(),
        selected: solution.selected,
        distance: solution.distance(),
        grid: build_grid(solution, GRID_POINTS),
    }
}

/// Write a fit report JSON file.
pub fn write_fit_json(path: &Path, report: &FitReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create fit JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::input(format!("Failed to write fit JSON: {e}")))?;

    Ok(())
}

/// Read a fit report JSON file.
pub fn read_fit_json(path: &Path) -> Result<FitReport, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open fit JSON '{}': {e}", path.display())))?;
    let report: FitReport =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid fit JSON: {e}")))?;
    Ok(report)
}

/// Sample the fitted curve between the launch point and the unrounded landing root.
fn build_grid(solution: &Solution, n: usize) -> TrajectoryGrid {
    let n = n.max(2);
    let x0 = 0.0;
    let x1 = solution.selected.raw;

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let xi = x0 + u * (x1 - x0);
        x.push(xi);
        y.push(solution.fit.coefficients.eval(xi));
    }

    TrajectoryGrid { x, y }
}
