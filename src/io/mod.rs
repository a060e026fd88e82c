//! Input/output helpers.
//!
//! - sample text ingest + validation (`ingest`)
//! - residual CSV export (`export`)
//! - fit report JSON read/write (`curve`)

pub mod curve;
pub mod export;
pub mod ingest;

pub use curve::*;
pub use export::*;
pub use ingest::*;
