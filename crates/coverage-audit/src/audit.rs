//! The coverage-suppression auditor.
//!
//! Read failures are fail-open: a file that cannot be read is logged and
//! treated as clean, so one bad file never hides violations elsewhere.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use maint_core::config::AuditConfig;
use maint_core::errors::AuditError;

use crate::matcher::SuppressionPattern;
use crate::report::write_text;
use crate::scanner::{collect_candidates, AuditReport, FileVerdict, Finding};

/// Inspect one file against the default suppression pattern.
pub fn inspect_file(path: &Path) -> FileVerdict {
    inspect_with(&SuppressionPattern::default(), path)
}

/// True if the file at `path` contains a suppression directive.
///
/// Unreadable files (missing, permission denied, not UTF-8) are logged and
/// reported as `false`.
pub fn has_disabled_coverage(path: &Path) -> bool {
    match inspect_file(path) {
        FileVerdict::Violation => true,
        FileVerdict::Clean => false,
        FileVerdict::ReadError(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "cannot read file, treating as clean"
            );
            false
        }
    }
}

fn inspect_with(pattern: &SuppressionPattern, path: &Path) -> FileVerdict {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            return FileVerdict::ReadError(AuditError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match pattern.first_match(&content) {
        Some((form, range)) => {
            tracing::debug!(
                path = %path.display(),
                form,
                offset = range.start,
                "suppression directive"
            );
            FileVerdict::Violation
        }
        None => FileVerdict::Clean,
    }
}

/// Pick the roots to scan: the caller's, or the configured defaults when
/// none were given.
pub fn resolve_roots(requested: Vec<PathBuf>, config: &AuditConfig) -> Vec<PathBuf> {
    if requested.is_empty() {
        config.effective_default_roots()
    } else {
        requested
    }
}

/// Walks roots and inspects every candidate, one file at a time.
#[derive(Debug, Default)]
pub struct Auditor {
    pattern: SuppressionPattern,
}

impl Auditor {
    /// Auditor with the block-comment and line-comment matchers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Audit every root in order and aggregate the findings.
    ///
    /// Overlapping roots are walked independently, so a file reachable from
    /// two roots is inspected once per root.
    pub fn audit(&self, roots: &[PathBuf]) -> AuditReport {
        let start = Instant::now();
        let mut report = AuditReport {
            roots: roots.to_vec(),
            ..Default::default()
        };

        for root in roots {
            let outcome = collect_candidates(root);
            tracing::info!(
                root = %root.display(),
                candidates = outcome.candidates.len(),
                dirs_pruned = outcome.dirs_pruned,
                "walked root"
            );

            report.stats.candidates += outcome.candidates.len();
            report.stats.dirs_pruned += outcome.dirs_pruned;
            report.stats.walk_errors += outcome.errors.len();
            report.walk_errors.extend(outcome.errors);

            for path in outcome.candidates {
                match inspect_with(&self.pattern, &path) {
                    FileVerdict::Clean => {}
                    FileVerdict::Violation => report.findings.push(Finding {
                        path,
                        verdict: FileVerdict::Violation,
                    }),
                    FileVerdict::ReadError(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "cannot read file, treating as clean"
                        );
                        report.findings.push(Finding {
                            path,
                            verdict: FileVerdict::ReadError(err),
                        });
                    }
                }
            }
        }

        report.stats.duration = start.elapsed();
        tracing::info!(
            candidates = report.stats.candidates,
            violations = report.violations().count(),
            duration_ms = report.stats.duration.as_millis() as u64,
            "audit finished"
        );
        report
    }
}

/// Audit `roots`, write the text report to `out`, and return whether any
/// violation was found.
pub fn scan<W: Write>(roots: &[PathBuf], out: &mut W) -> io::Result<bool> {
    let report = Auditor::new().audit(roots);
    write_text(&report, out)?;
    Ok(report.has_violations())
}
