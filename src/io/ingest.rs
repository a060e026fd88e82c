//! Sample file ingest.
//!
//! The input is plain text with one sample per line: two whitespace-separated
//! numbers `x y`. This module turns it into a clean list of `Sample`s.
//!
//! Design goals:
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Strict mode** for callers that prefer to fail on the first bad row
//! - **Separation of concerns**: no fitting logic here

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::{DatasetStats, NumberFormat, Sample};
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Ingest output: samples + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedSamples {
    pub source: Option<PathBuf>,
    pub format: NumberFormat,
    pub samples: Vec<Sample>,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

impl IngestedSamples {
    /// Wrap samples that did not come from a file (e.g. a simulation or a GUI table).
    pub fn from_samples(samples: Vec<Sample>, format: NumberFormat) -> Self {
        let stats = DatasetStats::from_samples(&samples);
        let rows_read = samples.len();
        Self {
            source: None,
            format,
            samples,
            stats,
            row_errors: Vec::new(),
            rows_read,
        }
    }
}

/// Read and parse a sample file.
///
/// With `strict`, the first malformed row aborts ingest with exit code 2.
pub fn read_samples(path: &Path, format: NumberFormat, strict: bool) -> Result<IngestedSamples, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read samples '{}': {e}", path.display())))?;

    let mut ingest = parse_samples(&text, format);
    ingest.source = Some(path.to_path_buf());

    if strict {
        if let Some(first) = ingest.row_errors.first() {
            return Err(AppError::input(format!(
                "{}:{}: {}",
                path.display(),
                first.line,
                first.message
            )));
        }
    }

    info!(
        "read {} sample(s) from '{}' ({} row(s) skipped)",
        ingest.samples.len(),
        path.display(),
        ingest.row_errors.len()
    );
    Ok(ingest)
}

/// Parse sample text. Malformed rows are skipped and recorded.
pub fn parse_samples(text: &str, format: NumberFormat) -> IngestedSamples {
    let mut samples = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        rows_read += 1;

        match parse_row(trimmed, format) {
            Ok(sample) => samples.push(sample),
            Err(message) => {
                warn!("line {line}: {message}; row skipped");
                row_errors.push(RowError { line, message });
            }
        }
    }

    let stats = DatasetStats::from_samples(&samples);
    IngestedSamples {
        source: None,
        format,
        samples,
        stats,
        row_errors,
        rows_read,
    }
}

fn parse_row(row: &str, format: NumberFormat) -> Result<Sample, String> {
    let tokens: Vec<&str> = row.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(format!("expected 2 values, found {}", tokens.len()));
    }

    let x = parse_number(tokens[0], format)?;
    let y = parse_number(tokens[1], format)?;
    Ok(Sample::new(x, y))
}

fn parse_number(token: &str, format: NumberFormat) -> Result<f64, String> {
    match format {
        NumberFormat::Integer => token
            .parse::<i64>()
            .map(|v| v as f64)
            .map_err(|_| format!("'{token}' is not an integer")),
        NumberFormat::Real => {
            let v = token
                .parse::<f64>()
                .map_err(|_| format!("'{token}' is not a number"))?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(format!("'{token}' is not finite"))
            }
        }
    }
}
