//! Error and exit-code plumbing shared by all CLI commands.

use std::fmt;

use crate::encoding::LayoutError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid arguments, configuration or encodings
    ValidationError = 1,
    /// Reading or writing files failed
    IoError = 2,
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Maps a config loading failure: read failures are I/O errors, bad content is a validation error.
    pub fn config_load(err: &anyhow::Error) -> Self {
        let message = format!("Failed to load configuration: {err:#}");
        if err.chain().any(|cause| cause.is::<std::io::Error>()) {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<LayoutError> for CliError {
    fn from(err: LayoutError) -> Self {
        Self::validation(format!("Failed to generate layout: {err}"))
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;
