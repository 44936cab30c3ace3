//! Report rendering.
//!
//! The text form is what CI logs show; callers must rely on the exit code,
//! not on parsing these lines.

use std::io::{self, Write};

use maint_core::errors::MaintErrorCode;
use serde::Serialize;

use crate::scanner::{AuditReport, FileVerdict, ScanStats};

pub const PASSED_LINE: &str = "Coverage disable check passed.";
pub const FAILED_LINE: &str = "Coverage disable check failed.";

/// Output format for `check-coverage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per finding, then a pass/fail line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Write one line per finding in encounter order, then the summary line.
pub fn write_text<W: Write>(report: &AuditReport, out: &mut W) -> io::Result<()> {
    for finding in &report.findings {
        match &finding.verdict {
            FileVerdict::Violation => {
                writeln!(out, "Coverage disable found in {}", finding.path.display())?;
            }
            FileVerdict::ReadError(err) => {
                writeln!(out, "Error reading {}: {}", finding.path.display(), err)?;
            }
            FileVerdict::Clean => {}
        }
    }

    if report.has_violations() {
        writeln!(out, "{FAILED_LINE}")
    } else {
        writeln!(out, "{PASSED_LINE}")
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    roots: Vec<String>,
    violations: Vec<String>,
    read_errors: Vec<JsonError>,
    walk_errors: Vec<JsonError>,
    stats: &'a ScanStats,
}

#[derive(Serialize)]
struct JsonError {
    path: String,
    code: &'static str,
    message: String,
}

/// Write the report as a single pretty-printed JSON document.
pub fn write_json<W: Write>(report: &AuditReport, out: &mut W) -> io::Result<()> {
    let doc = JsonReport {
        passed: !report.has_violations(),
        roots: report.roots.iter().map(|r| r.display().to_string()).collect(),
        violations: report.violations().map(|p| p.display().to_string()).collect(),
        read_errors: report
            .read_errors()
            .map(|(path, err)| JsonError {
                path: path.display().to_string(),
                code: err.error_code(),
                message: err.to_string(),
            })
            .collect(),
        walk_errors: report
            .walk_errors
            .iter()
            .map(|err| JsonError {
                path: err.path().display().to_string(),
                code: err.error_code(),
                message: err.to_string(),
            })
            .collect(),
        stats: &report.stats,
    };

    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Finding;
    use maint_core::errors::AuditError;
    use std::path::PathBuf;

    fn sample_report() -> AuditReport {
        AuditReport {
            roots: vec![PathBuf::from("packages")],
            findings: vec![
                Finding {
                    path: PathBuf::from("packages/a/src/broken.ts"),
                    verdict: FileVerdict::ReadError(AuditError::ReadFailed {
                        path: PathBuf::from("packages/a/src/broken.ts"),
                        source: io::Error::new(
                            io::ErrorKind::PermissionDenied,
                            "Permission denied",
                        ),
                    }),
                },
                Finding {
                    path: PathBuf::from("packages/a/src/keys.ts"),
                    verdict: FileVerdict::Violation,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_text_lines() {
        let mut out = Vec::new();
        write_text(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "Error reading packages/a/src/broken.ts: Permission denied",
                "Coverage disable found in packages/a/src/keys.ts",
                FAILED_LINE,
            ]
        );
    }

    #[test]
    fn test_text_passed_only() {
        let mut out = Vec::new();
        write_text(&AuditReport::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{PASSED_LINE}\n"));
    }

    #[test]
    fn test_json_document() {
        let mut out = Vec::new();
        write_json(&sample_report(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["passed"], false);
        assert_eq!(value["violations"][0], "packages/a/src/keys.ts");
        assert_eq!(value["read_errors"][0]["code"], "AUDIT_READ_ERROR");
        assert_eq!(value["stats"]["candidates"], 0);
    }
}
