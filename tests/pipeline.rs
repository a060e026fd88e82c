use std::path::PathBuf;

use projectile_fit::app::pipeline::{RunConfig, run_fit};
use projectile_fit::domain::{ComplexPolicy, NumberFormat, Rounding};
use projectile_fit::io::parse_samples;
use projectile_fit::{FitError, FitOptions, Sample, SelectOptions, fit_and_solve, fit_and_solve_with};

fn samples(points: &[(i64, i64)]) -> Vec<Sample> {
    points.iter().copied().map(Sample::from).collect()
}

fn sample_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/in.txt")
}

#[test]
fn parabola_through_origin_lands_at_minus_two() {
    let data = samples(&[(1, 3), (2, 8), (3, 15)]);
    let solution = fit_and_solve_with(&data, &FitOptions::default(), &SelectOptions::default()).unwrap();

    let c = solution.fit.coefficients;
    assert!(c.c0.abs() < 1e-9);
    assert!((c.c1 - 2.0).abs() < 1e-9);
    assert!((c.c2 - 1.0).abs() < 1e-9);
    assert_eq!(solution.distance(), -2.0);
    assert_eq!(fit_and_solve(&data).unwrap(), -2.0);
}

#[test]
fn empty_input_is_insufficient() {
    let err = fit_and_solve(&[]).unwrap_err();
    assert!(matches!(err, FitError::InsufficientData { .. }));
    assert!(err.to_string().starts_with("InsufficientDataError"));
}

fn flat_data() -> Vec<Sample> {
    (1..=10).map(|x| Sample::new(x as f64, 5.0)).collect()
}

#[test]
fn anchored_flat_data_gives_compromise_intercept() {
    // With the anchor the fit bends, so a landing root exists.
    let anchored = fit_and_solve_with(&flat_data(), &FitOptions::default(), &SelectOptions::default()).unwrap();
    let c0 = anchored.fit.coefficients.c0;
    assert!(c0 > 0.0 && c0 < 5.0);
}

#[test]
fn unanchored_flat_data_is_degenerate() {
    // Without the anchor the fit is the constant 5: no root at all.
    let free = FitOptions {
        anchor_at_origin: false,
        ..FitOptions::default()
    };
    let err = fit_and_solve_with(&flat_data(), &free, &SelectOptions::default()).unwrap_err();
    assert!(matches!(err, FitError::DegenerateQuadratic { .. }));
}

#[test]
fn real_input_with_overflowing_square_is_rejected() {
    let ingest = parse_samples("1e200 1\n2 3\n", NumberFormat::Real);
    assert_eq!(ingest.samples.len(), 2);

    let err = fit_and_solve(&ingest.samples).unwrap_err();
    assert!(matches!(err, FitError::InsufficientData { .. }));
}

#[test]
fn options_flow_through_the_pipeline() {
    // y = 4x - x² lands at 4 with every policy combination.
    let data = samples(&[(1, 3), (2, 4), (3, 3)]);
    for rounding in [Rounding::HalfEven, Rounding::HalfAwayFromZero] {
        for complex in [ComplexPolicy::Reject, ComplexPolicy::RealPart] {
            let opts = SelectOptions { rounding, complex };
            let solution = fit_and_solve_with(&data, &FitOptions::default(), &opts).unwrap();
            assert_eq!(solution.distance(), 4.0);
        }
    }
}

#[test]
fn sample_file_runs_end_to_end() {
    let config = RunConfig {
        input: sample_file(),
        format: NumberFormat::Integer,
        strict: true,
        fit: FitOptions::default(),
        select: SelectOptions::default(),
        quiet: true,
        export_report: None,
        export_residuals: None,
    };
    let run = run_fit(&config).unwrap();

    assert_eq!(run.ingest.samples.len(), 9);
    assert!(run.ingest.row_errors.is_empty());
    assert_eq!(run.solution.distance(), 10.0);
    assert!(run.solution.fit.quality.rmse < 1e-9);
}

#[test]
fn missing_file_reports_input_error() {
    let config = RunConfig {
        input: PathBuf::from("/no/such/samples.txt"),
        format: NumberFormat::Integer,
        strict: false,
        fit: FitOptions::default(),
        select: SelectOptions::default(),
        quiet: true,
        export_report: None,
        export_residuals: None,
    };
    let err = run_fit(&config).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
