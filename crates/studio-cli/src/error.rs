//! CLI error types.

use studio_metrics::MetricsError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file extension is not one we can read.
    #[error("Unsupported input file: {0}. Use a .json or .csv file.")]
    UnsupportedInput(String),

    /// Input file could not be read or parsed.
    #[error("Failed to load {path}: {message}")]
    Input {
        /// Offending file.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metrics error.
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates an input error for a file.
    pub fn input(path: &std::path::Path, message: impl ToString) -> Self {
        Self::Input {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
