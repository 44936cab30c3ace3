//! Sequential root walker built on `walkdir`.
//!
//! Excluded directories are rejected in `filter_entry`, so their subtrees
//! are never read.

use std::path::{Path, PathBuf};

use maint_core::errors::AuditError;
use walkdir::WalkDir;

use super::filter::{is_candidate, is_excluded_dir};

/// Candidates found under one root, plus what was skipped on the way.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub candidates: Vec<PathBuf>,
    pub dirs_pruned: usize,
    pub errors: Vec<AuditError>,
}

/// Collect every Candidate File under `root`.
///
/// Walk errors are recorded and the walk continues; a missing root yields
/// one error and no candidates. A root that is not a directory yields
/// nothing. Symlinked directories are not followed.
pub fn collect_candidates(root: &Path) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();
    let mut dirs_pruned = 0usize;

    if root.exists() && !root.is_dir() {
        tracing::debug!(root = %root.display(), "root is not a directory, skipping");
        return outcome;
    }

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.file_type().is_dir() && is_excluded_dir(entry.path()) {
            tracing::debug!(dir = %entry.path().display(), "pruned excluded directory");
            dirs_pruned += 1;
            return false;
        }
        true
    });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                tracing::warn!(path = %path.display(), error = %err, "walk error");
                outcome.errors.push(AuditError::WalkFailed {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        // Symlinks to directories are listed but not descended into.
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }
        if is_candidate(&entry.file_name().to_string_lossy()) {
            outcome.candidates.push(entry.into_path());
        }
    }

    outcome.dirs_pruned = dirs_pruned;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collects_nested_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src/components");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("Button.tsx"), "").unwrap();
        fs::write(src.join("Button.test.tsx"), "").unwrap();
        fs::write(dir.path().join("src/index.ts"), "").unwrap();
        fs::write(dir.path().join("src/index.js"), "").unwrap();

        let mut outcome = collect_candidates(dir.path());
        outcome.candidates.sort();

        assert_eq!(
            outcome.candidates,
            vec![src.join("Button.tsx"), dir.path().join("src/index.ts")]
        );
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_prunes_excluded_subtrees() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("node_modules/pkg/src");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("file.ts"), "").unwrap();
        fs::create_dir_all(dir.path().join("dist")).unwrap();
        fs::write(dir.path().join("dist/out.ts"), "").unwrap();

        let outcome = collect_candidates(dir.path());

        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.dirs_pruned, 2);
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("keys.ts");
        fs::write(&file, "// istanbul ignore next\n").unwrap();

        let outcome = collect_candidates(&file);

        assert!(outcome.candidates.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_missing_root_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = collect_candidates(&dir.path().join("absent"));

        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.errors.len(), 1);
    }
}
