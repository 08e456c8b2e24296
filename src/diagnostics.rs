use std::fmt;

use thiserror::Error;

/// Classification of a runtime fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An arithmetic operation was invoked on an unsupported kind pair.
    TypeOperand,
    /// `iter` was invoked on a kind with no defined iteration.
    NotIterable,
    /// `print` was invoked on a kind with no defined rendering.
    UnsupportedPrint,
    DivisionByZero,
    IndexOutOfBounds,
}

/// A reported fault: what went wrong and where.
///
/// The location is an opaque text tag supplied by the caller, typically a
/// `file:line:column` string produced by the surrounding evaluator.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub location: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, location: &str) -> Self {
        Self {
            kind,
            message: message.into(),
            location: location.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Error: {}", self.location, self.message)
    }
}

impl std::error::Error for Diagnostic {}

/// Unified error type for the Calla runtime core.
#[derive(Debug, Error)]
pub enum CallaError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CallaError {
    /// The fault classification, if this error carries a diagnostic.
    pub fn diagnostic_kind(&self) -> Option<DiagnosticKind> {
        match self {
            CallaError::Diagnostic(diagnostic) => Some(diagnostic.kind),
            CallaError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CallaError>;
