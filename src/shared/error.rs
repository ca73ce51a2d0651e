use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let CI jobs tell "the trees differ" apart from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no differences, or differences without `--exit-code`
    Success = 0,
    /// Differences were found and `--exit-code` was requested
    ChangesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed report, file I/O error, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ChangesDetected => write!(f, "Changes Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency tree comparison.
///
/// Uses thiserror to derive Display and Error; every message ends with a hint
/// the CLI prints verbatim.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Malformed dependency line {line_number}: {line:?}\nReason: {reason}\n\n💡 Hint: The report does not follow the `+--- group:artifact:version` tree convention. Re-run with --lenient to skip such lines")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Pass the text files produced by `gradle dependencies`")]
    InvalidInputPath { path: PathBuf, reason: String },

    /// Validation error for configuration and builder values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
