//! Audit types - verdicts, findings and the aggregated report

use std::path::{Path, PathBuf};
use std::time::Duration;

use maint_core::errors::AuditError;
use serde::Serialize;

/// Outcome of inspecting one candidate file.
#[derive(Debug)]
pub enum FileVerdict {
    /// Content contains a suppression directive.
    Violation,
    /// No directive found.
    Clean,
    /// The file could not be read. Counted as clean for pass/fail.
    ReadError(AuditError),
}

impl FileVerdict {
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation)
    }
}

/// A non-clean verdict, kept in encounter order.
#[derive(Debug)]
pub struct Finding {
    pub path: PathBuf,
    pub verdict: FileVerdict,
}

/// Statistics about the audit
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Candidate files inspected
    pub candidates: usize,
    /// Directories pruned by the exclusion rules
    pub dirs_pruned: usize,
    /// Walk errors (missing roots, unreadable directories)
    pub walk_errors: usize,
    /// Audit duration
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of auditing a set of roots
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Roots in the order they were scanned
    pub roots: Vec<PathBuf>,
    /// Violations and read errors, in encounter order
    pub findings: Vec<Finding>,
    /// Non-fatal traversal errors
    pub walk_errors: Vec<AuditError>,
    pub stats: ScanStats,
}

impl AuditReport {
    /// True if at least one violation was found. Read errors never count.
    pub fn has_violations(&self) -> bool {
        self.findings.iter().any(|f| f.verdict.is_violation())
    }

    /// Paths of violating files.
    pub fn violations(&self) -> impl Iterator<Item = &Path> {
        self.findings
            .iter()
            .filter(|f| f.verdict.is_violation())
            .map(|f| f.path.as_path())
    }

    /// Candidates that could not be read.
    pub fn read_errors(&self) -> impl Iterator<Item = (&Path, &AuditError)> {
        self.findings.iter().filter_map(|f| match &f.verdict {
            FileVerdict::ReadError(e) => Some((f.path.as_path(), e)),
            _ => None,
        })
    }
}

// Duration serialized as milliseconds
mod duration_millis {
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }
}
