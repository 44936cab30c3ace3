//! Sequential restore loop.

use std::io::{self, Write};

use maint_core::errors::RestoreError;

use crate::backend::RestoreBackend;

/// Per-file results of one restore run.
#[derive(Debug, Default)]
pub struct RestoreSummary {
    pub restored: Vec<String>,
    pub failed: Vec<(String, RestoreError)>,
}

impl RestoreSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Restore every path in order.
///
/// Successes go to `out` as `[✔] Restored: <path>`, failures to `err` as
/// `[✘] Failed to restore <path>: <error>`. A failed file never stops the
/// loop. Only writer errors are returned.
pub fn run_restore<B, O, E>(
    files: &[&str],
    source_ref: &str,
    backend: &B,
    out: &mut O,
    err: &mut E,
) -> io::Result<RestoreSummary>
where
    B: RestoreBackend + ?Sized,
    O: Write,
    E: Write,
{
    let mut summary = RestoreSummary::default();

    for &path in files {
        match backend.restore(source_ref, path) {
            Ok(()) => {
                writeln!(out, "[✔] Restored: {path}")?;
                summary.restored.push(path.to_string());
            }
            Err(e) => {
                tracing::debug!(path, error = %e, "restore failed");
                writeln!(err, "[✘] Failed to restore {path}: {e}")?;
                summary.failed.push((path.to_string(), e));
            }
        }
    }

    tracing::info!(
        restored = summary.restored.len(),
        failed = summary.failed.len(),
        source_ref,
        "restore finished"
    );
    Ok(summary)
}
