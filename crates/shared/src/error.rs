//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The allocation engine itself never fails on well-formed input; these
/// errors describe rejections that happen around it (bad records, bad
/// configuration, unreadable input files).
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied records failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed input (unparsable month, unknown window, bad file contents).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or is out of range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading or writing input/output failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error (a report that could not be rendered).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (BSD `sysexits` values).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => 65,
            Self::Io(_) => 74,
            Self::Configuration(_) => 78,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
