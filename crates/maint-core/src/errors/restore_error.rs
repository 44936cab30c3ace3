//! Upstream restore errors.

use super::error_code::{self, MaintErrorCode};

/// Errors that can occur while restoring a file from the upstream ref.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("{message}")]
    CommandFailed { path: String, message: String },

    #[error("Cannot create shell: {0}")]
    ShellUnavailable(String),
}

impl MaintErrorCode for RestoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CommandFailed { .. } => error_code::RESTORE_FAILED,
            Self::ShellUnavailable(_) => error_code::SHELL_UNAVAILABLE,
        }
    }
}
