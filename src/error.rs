//! Error types.
//!
//! - `FitError` is the typed failure of the numerical core (fit + root selection).
//! - `AppError` is what the binary reports: a message plus a process exit code.

/// Exit code for I/O, parse and argument failures.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for `FitError::InsufficientData`.
pub const EXIT_INSUFFICIENT_DATA: u8 = 3;
/// Exit code for `FitError::DegenerateQuadratic`.
pub const EXIT_DEGENERATE: u8 = 4;
/// Exit code for `FitError::NoQualifyingRoot`.
pub const EXIT_NO_ROOT: u8 = 5;

/// Failure of the fit/solve core.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// No rows to fit, too few samples, or non-finite values.
    InsufficientData { reason: String },
    /// `c1` and `c2` are both numerically zero, so no non-trivial root exists.
    DegenerateQuadratic { c1: f64, c2: f64 },
    /// Every root rounds to zero, or was rejected as complex.
    NoQualifyingRoot { candidates: Vec<f64> },
}

impl FitError {
    pub fn insufficient(reason: impl Into<String>) -> Self {
        FitError::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Short stable name of the condition, for structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            FitError::InsufficientData { .. } => "InsufficientDataError",
            FitError::DegenerateQuadratic { .. } => "DegenerateQuadraticError",
            FitError::NoQualifyingRoot { .. } => "NoQualifyingRootError",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            FitError::InsufficientData { .. } => EXIT_INSUFFICIENT_DATA,
            FitError::DegenerateQuadratic { .. } => EXIT_DEGENERATE,
            FitError::NoQualifyingRoot { .. } => EXIT_NO_ROOT,
        }
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InsufficientData { reason } => {
                write!(f, "{}: {reason}", self.kind())
            }
            FitError::DegenerateQuadratic { c1, c2 } => write!(
                f,
                "{}: fitted c1={c1:.6e} and c2={c2:.6e} are both zero; no non-trivial root",
                self.kind()
            ),
            FitError::NoQualifyingRoot { candidates } => {
                if candidates.is_empty() {
                    write!(f, "{}: no real roots to choose from", self.kind())
                } else {
                    let list: Vec<String> = candidates.iter().map(|v| format!("{v:.6}")).collect();
                    write!(
                        f,
                        "{}: every root rounds to zero ({})",
                        self.kind(),
                        list.join(", ")
                    )
                }
            }
        }
    }
}

impl std::error::Error for FitError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
