//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and root selection
//! - exported to JSON (fit reports)
//! - reloaded later by a table/plot front-end

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One observed point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The implicit launch point.
    pub const ORIGIN: Sample = Sample { x: 0.0, y: 0.0 };

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Sample {
    fn from((x, y): (i64, i64)) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

/// Coefficients of `y = c0 + c1·x + c2·x²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Coefficients {
    pub fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }

    /// Evaluate the polynomial at `x` (Horner form).
    pub fn eval(&self, x: f64) -> f64 {
        self.c0 + x * (self.c1 + x * self.c2)
    }

    /// Coefficients in ascending power order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.c0, self.c1, self.c2]
    }

    /// Largest coefficient magnitude; used as the scale for "numerically zero" checks.
    pub fn scale(&self) -> f64 {
        self.c0.abs().max(self.c1.abs()).max(self.c2.abs())
    }
}

/// How the number of design rows compares to the three unknowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Determination {
    /// Fewer rows than unknowns; the minimum-norm solution is returned.
    Under,
    /// Exactly three rows.
    Exact,
    /// More rows than unknowns; residuals are minimized.
    Over,
}

impl Determination {
    pub fn from_rows(rows: usize, unknowns: usize) -> Self {
        match rows.cmp(&unknowns) {
            std::cmp::Ordering::Less => Determination::Under,
            std::cmp::Ordering::Equal => Determination::Exact,
            std::cmp::Ordering::Greater => Determination::Over,
        }
    }
}

/// Fit quality diagnostics, computed over every row that entered the fit
/// (including the anchor when it is enabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub n: usize,
    pub sse: f64,
    pub rmse: f64,
    pub determination: Determination,
}

/// Options for the curve fitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitOptions {
    /// Prepend the sample `(0, 0)` before fitting, modelling a launch from the origin.
    pub anchor_at_origin: bool,
    /// Minimum number of real (non-anchor) samples required.
    pub min_samples: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            anchor_at_origin: true,
            min_samples: 1,
        }
    }
}

/// Output of a single quadratic fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadraticFit {
    pub coefficients: Coefficients,
    pub quality: FitQuality,
    pub anchored: bool,
}

/// Rounding rule applied to roots before the "non-zero" test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Ties go to the even neighbour (`2.5 → 2`, `3.5 → 4`).
    #[value(name = "half-even")]
    HalfEven,
    /// Ties go away from zero (`2.5 → 3`, `-2.5 → -3`).
    #[value(name = "half-away")]
    HalfAwayFromZero,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::HalfEven => value.round_ties_even(),
            Rounding::HalfAwayFromZero => value.round(),
        }
    }
}

/// What to do with a complex conjugate root pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexPolicy {
    /// Complex roots never qualify.
    Reject,
    /// Use the real part of each complex root.
    RealPart,
}

/// Options for the root selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectOptions {
    pub rounding: Rounding,
    pub complex: ComplexPolicy,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            rounding: Rounding::HalfEven,
            complex: ComplexPolicy::Reject,
        }
    }
}

/// A single root, real or one half of a conjugate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Root {
    Real { value: f64 },
    Complex { re: f64, im: f64 },
}

/// Roots of `c2·x² + c1·x + c0 = 0`, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuadraticRoots {
    /// `c2 ≈ 0`: a single root of `c1·x + c0 = 0`.
    Linear { root: f64 },
    /// Two real roots, larger magnitude first. They may coincide.
    Real { first: f64, second: f64 },
    /// A conjugate pair `re ± i·im` with `im > 0`; the `+` root comes first.
    Complex { re: f64, im: f64 },
}

impl QuadraticRoots {
    /// Roots in the order the selector visits them.
    pub fn to_vec(&self) -> Vec<Root> {
        match *self {
            QuadraticRoots::Linear { root } => vec![Root::Real { value: root }],
            QuadraticRoots::Real { first, second } => {
                vec![Root::Real { value: first }, Root::Real { value: second }]
            }
            QuadraticRoots::Complex { re, im } => vec![
                Root::Complex { re, im },
                Root::Complex { re, im: -im },
            ],
        }
    }
}

/// The root chosen as the landing distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedRoot {
    /// Position in `QuadraticRoots::to_vec()` order.
    pub index: usize,
    /// Value before rounding (the real part for complex roots under `RealPart`).
    pub raw: f64,
    /// Rounded value; never zero.
    pub rounded: f64,
}

/// Everything computed for one Sample Set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub fit: QuadraticFit,
    pub roots: QuadraticRoots,
    pub selected: SelectedRoot,
}

impl Solution {
    /// The landing distance (rounded root).
    pub fn distance(&self) -> f64 {
        self.selected.rounded
    }
}

/// How numbers are written in a sample file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Integer tokens only.
    Integer,
    /// Any finite real number.
    Real,
}

/// Summary stats about the samples actually used for fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_samples: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DatasetStats {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut stats = DatasetStats {
            n_samples: samples.len(),
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for s in samples {
            stats.x_min = stats.x_min.min(s.x);
            stats.x_max = stats.x_max.max(s.x);
            stats.y_min = stats.y_min.min(s.y);
            stats.y_max = stats.y_max.max(s.y);
        }
        if samples.is_empty() {
            stats.x_min = 0.0;
            stats.x_max = 0.0;
            stats.y_min = 0.0;
            stats.y_max = 0.0;
        }
        stats
    }
}

/// A saved fit report (JSON).
///
/// This is the hand-off format for front-ends that want to draw the fitted
/// trajectory without re-running the fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub source: Option<String>,
    pub stats: DatasetStats,
    pub fit_options: FitOptions,
    pub select_options: SelectOptions,
    pub coefficients: Coefficients,
    pub quality: FitQuality,
    pub roots: QuadraticRoots,
    pub selected: SelectedRoot,
    pub distance: f64,
    pub grid: TrajectoryGrid,
}

/// Fitted curve sampled from the launch point to the landing point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_ties() {
        assert_eq!(Rounding::HalfEven.apply(2.5), 2.0);
        assert_eq!(Rounding::HalfEven.apply(3.5), 4.0);
        assert_eq!(Rounding::HalfEven.apply(-2.5), -2.0);
        assert_eq!(Rounding::HalfAwayFromZero.apply(2.5), 3.0);
        assert_eq!(Rounding::HalfAwayFromZero.apply(-2.5), -3.0);
        assert_eq!(Rounding::HalfEven.apply(0.4), 0.0);
    }

    #[test]
    fn eval_matches_expanded_form() {
        let c = Coefficients::new(1.0, -2.0, 0.5);
        for &x in &[-3.0, 0.0, 1.5, 10.0] {
            let expected = 1.0 - 2.0 * x + 0.5 * x * x;
            assert!((c.eval(x) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn dataset_stats_ranges() {
        let samples = [Sample::new(1.0, 3.0), Sample::new(-2.0, 8.0), Sample::new(3.0, -1.0)];
        let stats = DatasetStats::from_samples(&samples);
        assert_eq!(stats.n_samples, 3);
        assert_eq!((stats.x_min, stats.x_max), (-2.0, 3.0));
        assert_eq!((stats.y_min, stats.y_max), (-1.0, 8.0));
    }

    #[test]
    fn determination_from_rows() {
        assert_eq!(Determination::from_rows(2, 3), Determination::Under);
        assert_eq!(Determination::from_rows(3, 3), Determination::Exact);
        assert_eq!(Determination::from_rows(7, 3), Determination::Over);
    }
}
