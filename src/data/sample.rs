//! Synthetic trajectory sample generation.
//!
//! A projectile launched from the origin at `angle` degrees with `speed` follows
//!
//! ```text
//! y(x) = tan(θ)·x - g / (2·v_x²) · x²
//! ```
//!
//! and lands at `x = 2·v_x·v_y / g`. We sample `count` points strictly inside
//! `(0, landing)` and add Gaussian noise to `y`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::{NumberFormat, Sample};
use crate::error::AppError;

/// Parameters for a simulated throw.
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    /// Launch angle in degrees, strictly between 0 and 90.
    pub angle_deg: f64,
    /// Launch speed.
    pub speed: f64,
    /// Gravitational acceleration.
    pub gravity: f64,
    /// Number of samples to generate.
    pub count: usize,
    /// Standard deviation of the noise added to `y`.
    pub noise: f64,
    pub seed: u64,
    /// `Integer` snaps `x` to whole numbers and rounds `y`, like hand-recorded data.
    pub format: NumberFormat,
}

impl SimulateConfig {
    /// Exact landing distance of the noiseless trajectory.
    pub fn landing_distance(&self) -> f64 {
        let theta = self.angle_deg.to_radians();
        2.0 * self.speed * self.speed * theta.sin() * theta.cos() / self.gravity
    }

    fn height_at(&self, x: f64) -> f64 {
        let theta = self.angle_deg.to_radians();
        let vx = self.speed * theta.cos();
        theta.tan() * x - self.gravity / (2.0 * vx * vx) * x * x
    }

    fn validate(&self) -> Result<(), AppError> {
        if !(self.angle_deg.is_finite() && self.angle_deg > 0.0 && self.angle_deg < 90.0) {
            return Err(AppError::input("Launch angle must be strictly between 0 and 90 degrees."));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(AppError::input("Launch speed must be > 0."));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(AppError::input("Gravity must be > 0."));
        }
        if self.count == 0 {
            return Err(AppError::input("Sample count must be > 0."));
        }
        if !(self.noise.is_finite() && self.noise >= 0.0) {
            return Err(AppError::input("Noise must be a finite value >= 0."));
        }
        Ok(())
    }
}

/// Generate samples along the trajectory.
pub fn simulate_samples(config: &SimulateConfig) -> Result<Vec<Sample>, AppError> {
    config.validate()?;

    let landing = config.landing_distance();
    let normal = Normal::new(0.0, config.noise)
        .map_err(|e| AppError::input(format!("Invalid noise distribution: {e}")))?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut samples = Vec::with_capacity(config.count);
    for i in 1..=config.count {
        let mut x = landing * i as f64 / (config.count as f64 + 1.0);
        if config.format == NumberFormat::Integer {
            x = x.round();
        }
        let mut y = config.height_at(x) + normal.sample(&mut rng);
        if config.format == NumberFormat::Integer {
            y = y.round();
        }
        samples.push(Sample::new(x, y));
    }

    debug!(
        "simulated {} sample(s), landing at x={landing:.4}",
        samples.len()
    );
    Ok(samples)
}

/// Write samples in the `x y` text format read by `io::ingest`.
pub fn write_samples<W: Write>(out: &mut W, samples: &[Sample], format: NumberFormat) -> std::io::Result<()> {
    for s in samples {
        match format {
            NumberFormat::Integer => writeln!(out, "{} {}", s.x.round() as i64, s.y.round() as i64)?,
            NumberFormat::Real => writeln!(out, "{} {}", s.x, s.y)?,
        }
    }
    Ok(())
}

/// Write samples to a file.
pub fn write_samples_file(path: &Path, samples: &[Sample], format: NumberFormat) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create samples '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write_samples(&mut out, samples, format)
        .and_then(|_| out.flush())
        .map_err(|e| AppError::input(format!("Failed to write samples '{}': {e}", path.display())))
}
