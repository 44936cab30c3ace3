//! Upstream restore configuration.

use serde::{Deserialize, Serialize};

/// Ref files are restored from when no `--source` is given.
pub const DEFAULT_SOURCE_REF: &str = "upstream/main";

/// Configuration for the upstream file restorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RestoreConfig {
    /// Git ref passed to `git restore --source`. Default: `upstream/main`.
    pub source_ref: Option<String>,
}

impl RestoreConfig {
    /// Returns the effective source ref, defaulting to `upstream/main`.
    pub fn effective_source_ref(&self) -> &str {
        self.source_ref.as_deref().unwrap_or(DEFAULT_SOURCE_REF)
    }
}
