//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments
//! - runs the fit pipeline or the simulator
//! - prints reports and writes optional exports

use std::io::Write;

use clap::Parser;
use log::debug;

use crate::cli::{Command, FitArgs, SimulateArgs};
use crate::data::{SimulateConfig, simulate_samples, write_samples, write_samples_file};
use crate::domain::{FitOptions, SelectOptions};
use crate::error::AppError;

pub mod pipeline;

use pipeline::RunConfig;

/// Entry point for the `pfit` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    // `pfit in.txt` behaves like `pfit fit in.txt`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Simulate(args) => handle_simulate(args),
    }
}

fn init_logging() {
    // A logger may already be installed by the host.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    debug!("fit config: {config:?}");
    let run = pipeline::run_fit(&config)?;

    if config.quiet {
        println!("{}", crate::report::format_distance(&run.solution));
    } else {
        println!(
            "{}",
            crate::report::format_run_summary(&run.ingest, &run.solution, &config.fit, &config.select)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_report {
        let report = crate::io::curve::build_report(&run.solution, &run.ingest, &config.fit, &config.select);
        crate::io::curve::write_fit_json(path, &report)?;
    }
    if let Some(path) = &config.export_residuals {
        crate::io::export::write_residuals_csv(path, &run.ingest.samples, &run.solution.fit)?;
    }

    Ok(())
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = SimulateConfig {
        angle_deg: args.angle,
        speed: args.speed,
        gravity: args.gravity,
        count: args.count,
        noise: args.noise,
        seed: args.seed,
        format: args.format,
    };
    let samples = simulate_samples(&config)?;

    match &args.output {
        Some(path) => {
            write_samples_file(path, &samples, args.format)?;
            eprintln!(
                "Wrote {} sample(s) to '{}' (true landing distance {:.4})",
                samples.len(),
                path.display(),
                config.landing_distance()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_samples(&mut out, &samples, args.format)
                .and_then(|_| out.flush())
                .map_err(|e| AppError::input(format!("Failed to write samples: {e}")))?;
        }
    }
    Ok(())
}

pub fn run_config_from_args(args: &FitArgs) -> RunConfig {
    RunConfig {
        input: args.input.clone(),
        format: args.format,
        strict: args.strict,
        fit: FitOptions {
            anchor_at_origin: !args.no_anchor,
            min_samples: args.min_samples,
        },
        select: SelectOptions {
            rounding: args.rounding,
            complex: args.complex,
        },
        quiet: args.quiet,
        export_report: args.export.clone(),
        export_residuals: args.export_residuals.clone(),
    }
}

/// Rewrite argv so a bare file argument runs `fit`.
///
/// Rules:
/// - `pfit`                         -> unchanged (clap prints usage)
/// - `pfit --help/--version/-h`     -> unchanged
/// - `pfit fit ...`/`pfit simulate` -> unchanged
/// - `pfit in.txt ...`              -> `pfit fit in.txt ...`
/// - `pfit --no-anchor in.txt`      -> `pfit fit --no-anchor in.txt`
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "simulate");
    if is_subcommand {
        return argv;
    }

    argv.insert(1, "fit".to_string());
    argv
}
