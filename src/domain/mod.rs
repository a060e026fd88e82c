//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input samples and dataset stats (`Sample`, `DatasetStats`)
//! - fit outputs (`Coefficients`, `QuadraticFit`, `FitQuality`)
//! - root selection types and policies (`QuadraticRoots`, `SelectedRoot`, `Rounding`)

pub mod types;

pub use types::*;
