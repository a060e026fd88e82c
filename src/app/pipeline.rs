//! Shared "fit pipeline" logic used by the CLI and by library callers.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! ingest -> fit -> solve -> select

use std::path::PathBuf;

use log::info;

use crate::domain::{FitOptions, NumberFormat, SelectOptions, Solution};
use crate::error::AppError;
use crate::fit::fit_and_solve_with;
use crate::io::ingest::{IngestedSamples, read_samples};

/// A run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: NumberFormat,
    pub strict: bool,
    pub fit: FitOptions,
    pub select: SelectOptions,
    pub quiet: bool,
    pub export_report: Option<PathBuf>,
    pub export_residuals: Option<PathBuf>,
}

/// All computed outputs of a single `pfit fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedSamples,
    pub solution: Solution,
}

/// Read the sample file and run the fit pipeline on it.
pub fn run_fit(config: &RunConfig) -> Result<RunOutput, AppError> {
    let ingest = read_samples(&config.input, config.format, config.strict)?;
    run_fit_with_samples(config, ingest)
}

/// Run the fit pipeline on already ingested samples.
pub fn run_fit_with_samples(config: &RunConfig, ingest: IngestedSamples) -> Result<RunOutput, AppError> {
    let solution = fit_and_solve_with(&ingest.samples, &config.fit, &config.select)?;
    info!(
        "selected root {:.6} -> distance {}",
        solution.selected.raw,
        solution.distance()
    );
    Ok(RunOutput { ingest, solution })
}
