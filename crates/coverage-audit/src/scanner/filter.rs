//! Candidate filtering rules.
//!
//! Suffix checks are case-sensitive and run against the file name, so
//! `component.test.ts` is excluded even though it ends in `.ts`.

use std::path::Path;

/// Directory paths containing any of these substrings are pruned, subtree included.
pub const EXCLUDED_DIR_SUBSTRINGS: &[&str] = &["node_modules", "dist", "build"];

/// File name suffixes that make a file eligible.
pub const SOURCE_SUFFIXES: &[&str] = &[".ts", ".tsx"];

/// Test and spec suffixes, never scanned.
pub const EXCLUDED_SUFFIXES: &[&str] = &[".test.ts", ".test.tsx", ".spec.ts", ".spec.tsx"];

/// True if `dir` should be skipped along with everything beneath it.
///
/// Substring match anywhere in the path, not per segment: `rebuild/` and
/// `distribution/` are pruned too.
pub fn is_excluded_dir(dir: &Path) -> bool {
    let path = dir.to_string_lossy();
    EXCLUDED_DIR_SUBSTRINGS.iter().any(|needle| path.contains(needle))
}

/// True if a file with this name is a Candidate File.
pub fn is_candidate(file_name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|s| file_name.ends_with(s))
        && !EXCLUDED_SUFFIXES.iter().any(|s| file_name.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_files_are_candidates() {
        assert!(is_candidate("index.ts"));
        assert!(is_candidate("Button.tsx"));
        assert!(is_candidate("types.d.ts"));
    }

    #[test]
    fn test_test_and_spec_files_excluded() {
        assert!(!is_candidate("Foo.test.ts"));
        assert!(!is_candidate("component.test.tsx"));
        assert!(!is_candidate("psbt.spec.ts"));
        assert!(!is_candidate("App.spec.tsx"));
    }

    #[test]
    fn test_other_extensions_ignored() {
        assert!(!is_candidate("index.js"));
        assert!(!is_candidate("README.md"));
        assert!(!is_candidate("config.ts.map"));
        assert!(!is_candidate("Upper.TS"));
    }

    #[test]
    fn test_excluded_dirs_by_substring() {
        assert!(is_excluded_dir(Path::new("packages/node_modules")));
        assert!(is_excluded_dir(Path::new("packages/wallets/dist/esm")));
        assert!(is_excluded_dir(Path::new("apps/coordinator/build")));
        assert!(is_excluded_dir(Path::new("packages/build-plugins/src")));
        assert!(is_excluded_dir(Path::new("src/distribution")));
    }

    #[test]
    fn test_regular_dirs_kept() {
        assert!(!is_excluded_dir(Path::new("packages/caravan-psbt/src")));
        assert!(!is_excluded_dir(Path::new("apps/coordinator/src/components")));
    }
}
