//! coverage-audit: finds `istanbul ignore` directives in TypeScript sources.
//!
//! - Matcher: block-comment and line-comment suppression matchers
//! - Scanner: root walking with directory pruning and candidate filtering
//! - Audit: per-file verdicts and the aggregated report
//! - Report: text (CI log) and JSON rendering

pub mod audit;
pub mod matcher;
pub mod report;
pub mod scanner;

pub use audit::{has_disabled_coverage, inspect_file, resolve_roots, scan, Auditor};
pub use matcher::{BlockCommentMatcher, LineCommentMatcher, SuppressionMatcher, SuppressionPattern};
pub use report::{write_json, write_text, ReportFormat};
pub use scanner::{AuditReport, FileVerdict, Finding, ScanStats};
