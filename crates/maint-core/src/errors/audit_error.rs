//! Coverage audit errors.

use std::path::PathBuf;

use super::error_code::{self, MaintErrorCode};

/// Errors that can occur while auditing a source tree.
///
/// None of these are fatal to a scan: they are recorded and the walk moves on.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("{source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot walk {path}: {message}")]
    WalkFailed { path: PathBuf, message: String },
}

impl AuditError {
    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadFailed { path, .. } | Self::WalkFailed { path, .. } => path,
        }
    }
}

impl MaintErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ReadFailed { .. } => error_code::AUDIT_READ_ERROR,
            Self::WalkFailed { .. } => error_code::AUDIT_WALK_ERROR,
        }
    }
}
