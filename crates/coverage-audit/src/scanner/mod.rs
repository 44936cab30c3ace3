//! Scanner module - root walking and candidate selection
//!
//! Walks each root with `walkdir`, pruning excluded directories before
//! descending, and keeps only TypeScript sources that are not tests.

mod filter;
mod types;
mod walker;

pub use filter::{
    is_candidate, is_excluded_dir, EXCLUDED_DIR_SUBSTRINGS, EXCLUDED_SUFFIXES, SOURCE_SUFFIXES,
};
pub use types::{AuditReport, FileVerdict, Finding, ScanStats};
pub use walker::{collect_candidates, WalkOutcome};
