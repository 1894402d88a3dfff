//! Shared CLI plumbing: error type, result alias, and exit codes.

use std::fmt;

/// Exit codes reported by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid arguments or values
    Validation = 2,
    /// Filesystem or serialization failure
    Io = 3,
}

/// Error produced by a CLI command handler.
#[derive(Debug)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// Creates a validation error (bad arguments or values).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error (filesystem or serialization failure).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.kind as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias used by all CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(CliError::validation("x").exit_code(), 2);
        assert_eq!(CliError::io("x").exit_code(), 3);
    }

    #[test]
    fn test_display_shows_message() {
        let err = CliError::validation("base hue out of range");
        assert_eq!(err.to_string(), "base hue out of range");
    }
}
