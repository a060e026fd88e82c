//! Command-line parsing for the projectile range fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ComplexPolicy, NumberFormat, Rounding};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pfit", version, about = "Projectile range fitter: quadratic least squares + landing root")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a parabola to a sample file and print the landing distance.
    Fit(FitArgs),
    /// Generate a synthetic sample file for a projectile launched from the origin.
    Simulate(SimulateArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Sample file: one `x y` pair per line.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Do not prepend the (0, 0) anchor sample.
    #[arg(long)]
    pub no_anchor: bool,

    /// Minimum number of samples required (excluding the anchor).
    #[arg(long, default_value_t = 1)]
    pub min_samples: usize,

    /// Number format of the sample file.
    #[arg(long, value_enum, default_value_t = NumberFormat::Integer)]
    pub format: NumberFormat,

    /// Fail on the first malformed row instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Tie-breaking rule when rounding roots.
    #[arg(long, value_enum, default_value_t = Rounding::HalfEven)]
    pub rounding: Rounding,

    /// How to treat complex roots.
    #[arg(long, value_enum, default_value_t = ComplexPolicy::Reject)]
    pub complex: ComplexPolicy,

    /// Print only the distance line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Export the fit report (coefficients, roots, trajectory grid) to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export per-sample residuals to CSV.
    #[arg(long = "export-residuals")]
    pub export_residuals: Option<PathBuf>,
}

/// Options for generating samples.
#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    /// Launch angle in degrees.
    #[arg(long, default_value_t = 45.0)]
    pub angle: f64,

    /// Launch speed.
    #[arg(long, default_value_t = 20.0)]
    pub speed: f64,

    /// Gravitational acceleration.
    #[arg(long, default_value_t = 9.81)]
    pub gravity: f64,

    /// Number of samples.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Standard deviation of noise added to y.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed for the noise.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number format to write.
    #[arg(long, value_enum, default_value_t = NumberFormat::Integer)]
    pub format: NumberFormat,

    /// Output file (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
