//! Mathematical utilities: power basis, least squares and quadratic roots.

pub mod basis;
pub mod ols;
pub mod roots;

pub use basis::*;
pub use ols::*;
pub use roots::*;
