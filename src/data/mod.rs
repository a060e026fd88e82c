//! Data sources other than sample files.
//!
//! - synthetic trajectory generation (`sample`)

pub mod sample;

pub use sample::*;
