//! Coverage audit configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Roots scanned when `check-coverage` is invoked without arguments.
pub const DEFAULT_AUDIT_ROOTS: &[&str] = &["apps", "packages"];

/// Configuration for the coverage-suppression audit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Roots to scan when none are passed on the command line.
    /// Default: `apps`, `packages`.
    pub default_roots: Vec<String>,
}

impl AuditConfig {
    /// Returns the effective default roots, falling back to the compiled defaults.
    pub fn effective_default_roots(&self) -> Vec<PathBuf> {
        if self.default_roots.is_empty() {
            DEFAULT_AUDIT_ROOTS.iter().map(PathBuf::from).collect()
        } else {
            self.default_roots.iter().map(PathBuf::from).collect()
        }
    }
}
