//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::{Determination, FitOptions, QuadraticRoots, SelectOptions, Solution};
use crate::io::ingest::IngestedSamples;
use crate::report::{compute_residuals, worst_residual};

/// The one-line answer.
pub fn format_distance(solution: &Solution) -> String {
    format!("Distance the stone travels = {}", solution.distance())
}

/// Format the full run summary (input stats + fit diagnostics + roots + distance).
pub fn format_run_summary(
    ingest: &IngestedSamples,
    solution: &Solution,
    fit_options: &FitOptions,
    select_options: &SelectOptions,
) -> String {
    let mut out = String::new();

    out.push_str("=== pfit - Projectile Range Fit ===\n");
    if let Some(path) = &ingest.source {
        out.push_str(&format!("Input: {}\n", path.display()));
    }
    out.push_str(&format!(
        "Samples: n={} (rows read={}, skipped={}) | x=[{}, {}] | y=[{}, {}]\n",
        ingest.stats.n_samples,
        ingest.rows_read,
        ingest.row_errors.len(),
        ingest.stats.x_min,
        ingest.stats.x_max,
        ingest.stats.y_min,
        ingest.stats.y_max,
    ));
    for e in ingest.row_errors.iter().take(5) {
        out.push_str(&format!("  (skipped line {}) {}\n", e.line, e.message));
    }
    if ingest.row_errors.len() > 5 {
        out.push_str(&format!("  ... and {} more\n", ingest.row_errors.len() - 5));
    }

    let fit = &solution.fit;
    let c = &fit.coefficients;
    out.push_str("\nFit:\n");
    out.push_str(&format!(
        "- model: y = {:.6} + {:.6}·x + {:.6}·x²\n",
        c.c0, c.c1, c.c2
    ));
    out.push_str(&format!(
        "- anchor at origin: {}\n",
        if fit_options.anchor_at_origin { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "- rows={} SSE={:.6} RMSE={:.6} ({})\n",
        fit.quality.n,
        fit.quality.sse,
        fit.quality.rmse,
        determination_label(fit.quality.determination)
    ));
    if let Some(worst) = worst_residual(&compute_residuals(&ingest.samples, fit)) {
        out.push_str(&format!(
            "- worst residual: {:.6} at x={}\n",
            worst.residual, worst.sample.x
        ));
    }

    out.push_str("\nRoots:\n");
    out.push_str(&format!("- {}\n", format_roots(&solution.roots)));
    out.push_str(&format!(
        "- rounding={:?} complex={:?}\n",
        select_options.rounding, select_options.complex
    ));
    out.push_str(&format!(
        "- selected #{}: {:.6} -> {}\n",
        solution.selected.index, solution.selected.raw, solution.selected.rounded
    ));

    out.push('\n');
    out.push_str(&format_distance(solution));
    out.push('\n');
    out
}

pub fn format_roots(roots: &QuadraticRoots) -> String {
    match *roots {
        QuadraticRoots::Linear { root } => format!("linear: {root:.6}"),
        QuadraticRoots::Real { first, second } => format!("real: {first:.6}, {second:.6}"),
        QuadraticRoots::Complex { re, im } => format!("complex: {re:.6} ± {im:.6}i"),
    }
}

fn determination_label(d: Determination) -> &'static str {
    match d {
        Determination::Under => "underdetermined, minimum-norm",
        Determination::Exact => "exactly determined",
        Determination::Over => "least squares",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NumberFormat, Sample};
    use crate::fit::fit_and_solve_with;

    #[test]
    fn summary_mentions_fit_and_distance() {
        let samples = vec![Sample::new(1.0, 3.0), Sample::new(2.0, 8.0), Sample::new(3.0, 15.0)];
        let fit_opts = FitOptions::default();
        let sel_opts = SelectOptions::default();
        let solution = fit_and_solve_with(&samples, &fit_opts, &sel_opts).unwrap();
        let ingest = IngestedSamples::from_samples(samples, NumberFormat::Integer);

        let text = format_run_summary(&ingest, &solution, &fit_opts, &sel_opts);
        assert!(text.contains("Samples: n=3"));
        assert!(text.contains("least squares"));
        assert!(text.contains("real: -2.000000"));
        assert!(text.ends_with("Distance the stone travels = -2\n"));
    }

    #[test]
    fn roots_are_labelled_by_kind() {
        assert_eq!(format_roots(&QuadraticRoots::Linear { root: 3.0 }), "linear: 3.000000");
        assert_eq!(
            format_roots(&QuadraticRoots::Complex { re: 2.0, im: 3.0 }),
            "complex: 2.000000 ± 3.000000i"
        );
    }
}
