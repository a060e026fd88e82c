//! `projectile-fit` library crate.
//!
//! Fits a parabola through trajectory samples (optionally anchored at the
//! origin) and reports where it comes back down to zero.
//!
//! The binary (`pfit`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - front-ends (table editors, plot widgets) can call `fit::fit_and_solve` directly

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;

pub use domain::{Coefficients, FitOptions, Sample, SelectOptions, SelectedRoot, Solution};
pub use error::{AppError, FitError};
pub use fit::{fit_and_solve, fit_and_solve_with, fit_quadratic, select_root};
