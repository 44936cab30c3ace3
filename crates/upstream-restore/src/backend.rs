//! Restore backends.

use std::path::Path;

use maint_core::errors::RestoreError;
use xshell::{cmd, Shell};

/// Something that can restore one working-tree file from a ref.
pub trait RestoreBackend {
    fn restore(&self, source_ref: &str, path: &str) -> Result<(), RestoreError>;
}

/// Arguments passed to `git` to restore `path` from `source_ref`.
///
/// Only the working tree is touched; the index is left alone.
pub fn restore_args(source_ref: &str, path: &str) -> Vec<String> {
    vec![
        "restore".to_string(),
        format!("--source={source_ref}"),
        "--".to_string(),
        path.to_string(),
    ]
}

/// Runs `git restore` in a shell rooted at the repository.
pub struct GitRestore {
    sh: Shell,
}

impl GitRestore {
    /// Backend running in the current working directory.
    pub fn new() -> Result<Self, RestoreError> {
        let sh = Shell::new().map_err(|e| RestoreError::ShellUnavailable(e.to_string()))?;
        Ok(Self { sh })
    }

    /// Backend running in `repo_root`.
    pub fn in_dir(repo_root: &Path) -> Result<Self, RestoreError> {
        let backend = Self::new()?;
        backend.sh.change_dir(repo_root);
        Ok(backend)
    }
}

impl RestoreBackend for GitRestore {
    fn restore(&self, source_ref: &str, path: &str) -> Result<(), RestoreError> {
        let sh = &self.sh;
        let args = restore_args(source_ref, path);
        tracing::debug!(path, source_ref, "git restore");

        cmd!(sh, "git {args...}")
            .quiet()
            .run()
            .map_err(|e| RestoreError::CommandFailed {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}
